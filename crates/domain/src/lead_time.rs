use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A `LeadTime` is how long before the start of a `Lecture` a reminder
/// should be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadTime {
    pub minutes: u32,
    /// Human readable form used in the reminder message, e.g. "1 hour"
    pub label: String,
}

impl LeadTime {
    pub fn new(minutes: u32) -> Self {
        Self {
            minutes,
            label: Self::default_label(minutes),
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.minutes))
    }

    fn default_label(minutes: u32) -> String {
        match minutes {
            60 => "1 hour".into(),
            m if m > 0 && m % 60 == 0 => format!("{} hours", m / 60),
            1 => "1 minute".into(),
            m => format!("{} minutes", m),
        }
    }
}

/// Reminders are sent one hour, 45, 30 and 15 minutes before a lecture
pub fn default_lead_times() -> Vec<LeadTime> {
    vec![
        LeadTime::new(60),
        LeadTime::new(45),
        LeadTime::new(30),
        LeadTime::new(15),
    ]
}
