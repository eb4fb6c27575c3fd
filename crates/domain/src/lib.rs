mod due;
mod lead_time;
mod lecture;
mod occurrence;
mod sent_tracker;
mod shared;
mod weekday;

pub use due::DueSetCalculator;
pub use lead_time::{default_lead_times, LeadTime};
pub use lecture::{parse_time_of_day, InvalidTimeError, Lecture};
pub use occurrence::OccurrenceKey;
pub use sent_tracker::SentTracker;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use weekday::{parse_weekday, weekday_label, InvalidWeekdayError};
