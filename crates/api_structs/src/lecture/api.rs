use crate::dtos::LectureDTO;
use lecture_reminder_domain::{Lecture, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LectureResponse {
    pub lecture: LectureDTO,
}

impl LectureResponse {
    pub fn new(lecture: Lecture) -> Self {
        Self {
            lecture: LectureDTO::new(lecture),
        }
    }
}

pub mod create_lecture {
    use super::*;

    /// Absent fields are read as empty so they are reported like blank ones
    #[derive(Serialize, Deserialize, Debug, Default)]
    #[serde(rename_all = "camelCase", default)]
    pub struct RequestBody {
        pub day: String,
        pub start_time: String,
        pub subject: String,
        pub venue: String,
        pub lecturer: String,
    }

    pub type APIResponse = LectureResponse;
}

pub mod delete_lecture {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub lecture_id: ID,
    }

    pub type APIResponse = LectureResponse;
}

pub mod get_lectures {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, Default)]
    pub struct QueryParams {
        pub day: Option<String>,
    }

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub lectures: Vec<LectureDTO>,
    }

    impl APIResponse {
        pub fn new(lectures: Vec<Lecture>) -> Self {
            Self {
                lectures: lectures.into_iter().map(LectureDTO::new).collect(),
            }
        }
    }
}
