use crate::error::LectureReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::Datelike;
use lecture_reminder_api_structs::create_lecture::*;
use lecture_reminder_domain::{parse_time_of_day, parse_weekday, Lecture};
use lecture_reminder_infra::ReminderContext;

pub async fn create_lecture_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, LectureReminderError> {
    let body = body.0;
    let usecase = CreateLectureUseCase {
        day: body.day,
        start_time: body.start_time,
        subject: body.subject,
        venue: body.venue,
        lecturer: body.lecturer,
    };

    execute(usecase, &ctx)
        .await
        .map(|lecture| HttpResponse::Created().json(APIResponse::new(lecture)))
        .map_err(LectureReminderError::from)
}

#[derive(Debug)]
pub struct CreateLectureUseCase {
    pub day: String,
    pub start_time: String,
    pub subject: String,
    pub venue: String,
    pub lecturer: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    MissingFields,
    InvalidDay(String),
    InvalidTime(String),
    StartsInThePast,
    StorageError,
}

impl From<UseCaseError> for LectureReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingFields => Self::BadClientData("All fields are required!".into()),
            UseCaseError::InvalidDay(day) => Self::BadClientData(format!(
                "Day must be a day of the week (e.g., Monday), got: {}",
                day
            )),
            UseCaseError::InvalidTime(_) => {
                Self::BadClientData("Time must be in HH:MM format (e.g., 14:30)".into())
            }
            UseCaseError::StartsInThePast => {
                Self::BadClientData("Lecture time is in the past.".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait]
impl UseCase for CreateLectureUseCase {
    type Response = Lecture;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateLecture";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let fields = [
            &self.day,
            &self.start_time,
            &self.subject,
            &self.venue,
            &self.lecturer,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(UseCaseError::MissingFields);
        }

        let day =
            parse_weekday(&self.day).map_err(|_| UseCaseError::InvalidDay(self.day.clone()))?;
        let start_time = parse_time_of_day(&self.start_time)
            .map_err(|_| UseCaseError::InvalidTime(self.start_time.clone()))?;

        let now = ctx.sys.get_local_datetime();
        if day == now.weekday() && start_time <= now.time() {
            return Err(UseCaseError::StartsInThePast);
        }

        let lecture = Lecture::new(
            day,
            start_time.format("%H:%M").to_string(),
            self.subject.trim(),
            self.venue.trim(),
            self.lecturer.trim(),
        );

        ctx.repos
            .lectures
            .insert(&lecture)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(lecture)
    }
}
