use lecture_reminder_domain::{weekday_label, Lecture, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LectureDTO {
    pub id: ID,
    pub day: String,
    pub start_time: String,
    pub subject: String,
    pub venue: String,
    pub lecturer: String,
}

impl LectureDTO {
    pub fn new(lecture: Lecture) -> Self {
        Self {
            id: lecture.id,
            day: weekday_label(lecture.day).to_string(),
            start_time: lecture.start_time,
            subject: lecture.subject,
            venue: lecture.venue,
            lecturer: lecture.lecturer,
        }
    }
}
