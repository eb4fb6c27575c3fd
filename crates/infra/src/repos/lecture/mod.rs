mod inmemory;
mod sqlite;

use chrono::Weekday;
pub use inmemory::InMemoryLectureRepo;
use lecture_reminder_domain::{Lecture, ID};
pub use sqlite::SqliteLectureRepo;

#[async_trait::async_trait]
pub trait ILectureRepo: Send + Sync {
    async fn insert(&self, lecture: &Lecture) -> anyhow::Result<()>;
    async fn find(&self, lecture_id: &ID) -> Option<Lecture>;
    async fn find_all(&self) -> anyhow::Result<Vec<Lecture>>;
    /// All lectures taking place on `day`, empty if there are none
    async fn find_by_day(&self, day: Weekday) -> anyhow::Result<Vec<Lecture>>;
    /// Removes the lecture, `Ok(None)` if there is no lecture with that id
    async fn delete(&self, lecture_id: &ID) -> anyhow::Result<Option<Lecture>>;
}
