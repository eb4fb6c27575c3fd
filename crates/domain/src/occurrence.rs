use crate::shared::entity::ID;
use chrono::Weekday;

/// Identifies the occurrence of a `Lecture` on a given day, which is what
/// reminders are deduplicated against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OccurrenceKey {
    pub lecture_id: ID,
    pub day: Weekday,
}

impl OccurrenceKey {
    pub fn new(lecture_id: ID, day: Weekday) -> Self {
        Self { lecture_id, day }
    }
}
