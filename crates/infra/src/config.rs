use lecture_reminder_domain::{default_lead_times, LeadTime};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Where reminder notifications are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierKind {
    /// Native desktop notifications
    Desktop,
    /// Only write the reminders to the log, useful on headless hosts
    Log,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// SQLite connection string of the lecture store
    pub database_url: String,
    /// How often the reminder job looks for reminders that are due.
    pub poll_period: Duration,
    /// How far ahead of the notification time a reminder is still
    /// considered due. Polls that are further apart than this window can
    /// skip reminders, so keep it at least as large as `poll_period`.
    pub tolerance_window: chrono::Duration,
    /// When to remind about a lecture, ordered from the earliest
    pub lead_times: Vec<LeadTime>,
    pub notifier: NotifierKind,
}

impl Config {
    pub fn new() -> Self {
        let default_port = 5000;
        let port = parse_env("PORT", default_port, |port| port.parse::<usize>().ok());

        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let url = default_database_url();
                info!(
                    "Did not find DATABASE_URL environment variable. Going to use: {}",
                    url
                );
                url
            }
        };

        let poll_period = parse_env("POLL_PERIOD_SECS", 60, |secs| {
            secs.parse::<u64>().ok().filter(|secs| *secs > 0)
        });
        let tolerance_window = parse_env("TOLERANCE_WINDOW_MINUTES", 1, |mins| {
            mins.parse::<i64>().ok().filter(|mins| *mins >= 0)
        });
        let lead_times = parse_env("LEAD_TIMES", default_lead_times(), parse_lead_times);
        let notifier = parse_env("NOTIFIER", NotifierKind::Desktop, parse_notifier_kind);

        let config = Self {
            port,
            database_url,
            poll_period: Duration::from_secs(poll_period),
            tolerance_window: chrono::Duration::minutes(tolerance_window),
            lead_times,
            notifier,
        };
        config.warn_on_skipped_windows();
        config
    }

    /// Default values without looking at the environment
    pub fn with_defaults(database_url: impl Into<String>) -> Self {
        Self {
            port: 5000,
            database_url: database_url.into(),
            poll_period: Duration::from_secs(60),
            tolerance_window: chrono::Duration::minutes(1),
            lead_times: default_lead_times(),
            notifier: NotifierKind::Log,
        }
    }

    fn warn_on_skipped_windows(&self) {
        let window_secs = self.tolerance_window.num_seconds().max(0) as u64;
        if self.poll_period.as_secs() > window_secs {
            warn!(
                "The poll period of {} seconds is longer than the tolerance window of {} seconds. Some reminders might never be sent.",
                self.poll_period.as_secs(),
                window_secs
            );
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env<T: std::fmt::Debug, F: Fn(&str) -> Option<T>>(key: &str, default: T, parse: F) -> T {
    match std::env::var(key) {
        Ok(value) => match parse(&value) {
            Some(parsed) => parsed,
            None => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {:?}.",
                    key, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

// `lectures.db` in the same directory belongs to older versions of the app
fn default_database_url() -> String {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("LectureReminder");
    format!("sqlite://{}", dir.join("reminders.db").display())
}

/// Parses a comma separated list of minutes, e.g. "60,45,30,15".
/// Duplicates are dropped, zero or unparseable entries make the whole list invalid.
pub fn parse_lead_times(value: &str) -> Option<Vec<LeadTime>> {
    let mut lead_times: Vec<LeadTime> = Vec::new();
    for entry in value.split(',') {
        let minutes = entry.trim().parse::<u32>().ok().filter(|m| *m > 0)?;
        if !lead_times.iter().any(|l| l.minutes == minutes) {
            lead_times.push(LeadTime::new(minutes));
        }
    }
    if lead_times.is_empty() {
        None
    } else {
        Some(lead_times)
    }
}

fn parse_notifier_kind(value: &str) -> Option<NotifierKind> {
    match value.trim().to_lowercase().as_str() {
        "desktop" => Some(NotifierKind::Desktop),
        "log" => Some(NotifierKind::Log),
        _ => None,
    }
}
