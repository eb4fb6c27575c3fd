mod config;
mod repos;
mod services;
mod system;

pub use config::{parse_lead_times, Config, NotifierKind};
pub use repos::{ILectureRepo, InMemoryLectureRepo, Repos, SqliteLectureRepo};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::SqlitePool;
use std::sync::Arc;
pub use system::{ISys, ManualSys, RealSys};

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

impl ReminderContext {
    async fn create(config: Config) -> anyhow::Result<Self> {
        let repos = Repos::create_sqlite(&config.database_url).await?;
        let notifier: Arc<dyn INotifier> = match config.notifier {
            NotifierKind::Desktop => Arc::new(DesktopNotifier {}),
            NotifierKind::Log => Arc::new(LogNotifier {}),
        };
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifier,
        })
    }

    /// Context backed by in memory repos which only logs notifications
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::with_defaults("sqlite::memory:"),
            sys: Arc::new(RealSys {}),
            notifier: Arc::new(LogNotifier {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<ReminderContext> {
    ReminderContext::create(Config::new()).await
}

pub async fn run_migration(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!().run(pool).await
}
