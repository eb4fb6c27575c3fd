mod lecture;
mod shared;

pub use lecture::{ILectureRepo, InMemoryLectureRepo, SqliteLectureRepo};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub lectures: Arc<dyn ILectureRepo>,
}

impl Repos {
    /// The pool hands out separate connections to the http handlers and
    /// the reminder job, so they never share a connection across threads.
    pub async fn create_sqlite(connection_string: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(connection_string)?.create_if_missing(true);
        std::fs::create_dir_all(
            options
                .get_filename()
                .parent()
                .unwrap_or_else(|| std::path::Path::new("")),
        )?;

        info!("DB CHECKING CONNECTION ...");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        crate::run_migration(&pool).await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            lectures: Arc::new(SqliteLectureRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            lectures: Arc::new(InMemoryLectureRepo::new()),
        }
    }
}
