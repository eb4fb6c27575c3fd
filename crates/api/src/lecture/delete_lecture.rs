use crate::error::LectureReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lecture_reminder_api_structs::delete_lecture::*;
use lecture_reminder_domain::{Lecture, ID};
use lecture_reminder_infra::ReminderContext;

pub async fn delete_lecture_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, LectureReminderError> {
    let usecase = DeleteLectureUseCase {
        lecture_id: path.lecture_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|lecture| HttpResponse::Ok().json(APIResponse::new(lecture)))
        .map_err(LectureReminderError::from)
}

#[derive(Debug)]
pub struct DeleteLectureUseCase {
    pub lecture_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for LectureReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(lecture_id) => Self::NotFound(format!(
                "The lecture with id: {}, was not found.",
                lecture_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait]
impl UseCase for DeleteLectureUseCase {
    type Response = Lecture;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteLecture";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .lectures
            .delete(&self.lecture_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or_else(|| UseCaseError::NotFound(self.lecture_id.clone()))
    }
}
