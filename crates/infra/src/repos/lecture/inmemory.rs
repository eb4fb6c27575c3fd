use super::ILectureRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::Weekday;
use lecture_reminder_domain::{Lecture, ID};

pub struct InMemoryLectureRepo {
    lectures: std::sync::Mutex<Vec<Lecture>>,
}

impl InMemoryLectureRepo {
    pub fn new() -> Self {
        Self {
            lectures: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryLectureRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ILectureRepo for InMemoryLectureRepo {
    async fn insert(&self, lecture: &Lecture) -> anyhow::Result<()> {
        insert(lecture, &self.lectures);
        Ok(())
    }

    async fn find(&self, lecture_id: &ID) -> Option<Lecture> {
        find(lecture_id, &self.lectures)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Lecture>> {
        Ok(find_by(&self.lectures, |_| true))
    }

    async fn find_by_day(&self, day: Weekday) -> anyhow::Result<Vec<Lecture>> {
        Ok(find_by(&self.lectures, |lecture| lecture.day == day))
    }

    async fn delete(&self, lecture_id: &ID) -> anyhow::Result<Option<Lecture>> {
        Ok(delete(lecture_id, &self.lectures))
    }
}
