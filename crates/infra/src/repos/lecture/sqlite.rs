use super::ILectureRepo;
use chrono::Weekday;
use lecture_reminder_domain::{parse_weekday, weekday_label, Lecture, ID};
use sqlx::{FromRow, SqlitePool};
use tracing::{error, warn};

pub struct SqliteLectureRepo {
    pool: SqlitePool,
}

impl SqliteLectureRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LectureRaw {
    lecture_uid: String,
    day: String,
    start_time: String,
    subject: String,
    venue: String,
    lecturer: String,
}

impl TryFrom<LectureRaw> for Lecture {
    type Error = anyhow::Error;

    fn try_from(raw: LectureRaw) -> Result<Self, Self::Error> {
        Ok(Lecture {
            id: raw.lecture_uid.parse()?,
            day: parse_weekday(&raw.day)?,
            start_time: raw.start_time,
            subject: raw.subject,
            venue: raw.venue,
            lecturer: raw.lecturer,
        })
    }
}

// Rows written by other clients can be invalid, they are left out
fn into_lectures(rows: Vec<LectureRaw>) -> Vec<Lecture> {
    rows.into_iter()
        .filter_map(|raw| {
            let uid = raw.lecture_uid.clone();
            match Lecture::try_from(raw) {
                Ok(lecture) => Some(lecture),
                Err(e) => {
                    warn!("Skipping invalid lecture row {}: {}", uid, e);
                    None
                }
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl ILectureRepo for SqliteLectureRepo {
    async fn insert(&self, lecture: &Lecture) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO weekly_lectures
            (lecture_uid, day, start_time, subject, venue, lecturer)
            VALUES(?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(lecture.id.as_string())
        .bind(weekday_label(lecture.day))
        .bind(lecture.start_time.as_str())
        .bind(lecture.subject.as_str())
        .bind(lecture.venue.as_str())
        .bind(lecture.lecturer.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, lecture_id: &ID) -> Option<Lecture> {
        let res = sqlx::query_as::<_, LectureRaw>(
            r#"
            SELECT * FROM weekly_lectures
            WHERE lecture_uid = ?
            "#,
        )
        .bind(lecture_id.as_string())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => into_lectures(raw.into_iter().collect()).pop(),
            Err(e) => {
                error!("Unable to find lecture {}: {:?}", lecture_id, e);
                None
            }
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Lecture>> {
        let rows = sqlx::query_as::<_, LectureRaw>(
            r#"
            SELECT * FROM weekly_lectures
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(into_lectures(rows))
    }

    // Other clients may have stored short or lowercase day names, so the
    // day is compared after parsing instead of in the query
    async fn find_by_day(&self, day: Weekday) -> anyhow::Result<Vec<Lecture>> {
        let lectures = self.find_all().await?;
        Ok(lectures
            .into_iter()
            .filter(|lecture| lecture.day == day)
            .collect())
    }

    async fn delete(&self, lecture_id: &ID) -> anyhow::Result<Option<Lecture>> {
        let raw = sqlx::query_as::<_, LectureRaw>(
            r#"
            DELETE FROM weekly_lectures
            WHERE lecture_uid = ?
            RETURNING *
            "#,
        )
        .bind(lecture_id.as_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(into_lectures(raw.into_iter().collect()).pop())
    }
}
