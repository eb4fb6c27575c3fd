use crate::error::LectureReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::Weekday;
use lecture_reminder_api_structs::get_lectures::*;
use lecture_reminder_domain::{parse_weekday, Lecture};
use lecture_reminder_infra::ReminderContext;

pub async fn get_lectures_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, LectureReminderError> {
    let day = match &query.day {
        Some(day) => Some(
            parse_weekday(day).map_err(|_| UseCaseError::InvalidDay(day.clone()))?,
        ),
        None => None,
    };
    let usecase = GetLecturesUseCase { day };

    execute(usecase, &ctx)
        .await
        .map(|lectures| HttpResponse::Ok().json(APIResponse::new(lectures)))
        .map_err(LectureReminderError::from)
}

/// Lists the stored lectures in insertion order, optionally only
/// the ones taking place on the given day.
#[derive(Debug)]
pub struct GetLecturesUseCase {
    pub day: Option<Weekday>,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidDay(String),
    StorageError,
}

impl From<UseCaseError> for LectureReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidDay(day) => Self::BadClientData(format!(
                "Day must be a day of the week (e.g., Monday), got: {}",
                day
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait]
impl UseCase for GetLecturesUseCase {
    type Response = Vec<Lecture>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetLectures";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let res = match self.day {
            Some(day) => ctx.repos.lectures.find_by_day(day).await,
            None => ctx.repos.lectures.find_all().await,
        };
        res.map_err(|_| UseCaseError::StorageError)
    }
}
