use crate::{
    lead_time::LeadTime,
    shared::entity::{Entity, ID},
    weekday::weekday_label,
};
use chrono::{NaiveTime, Weekday};
use std::fmt::Display;
use thiserror::Error;

/// A `Lecture` is a weekly recurring event. It takes place every `day`
/// at `start_time` and its lecturer should be reminded some minutes
/// before it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Lecture {
    pub id: ID,
    pub day: Weekday,
    /// Time of day in the `HH:MM` format.
    /// Kept as text because the store can contain rows written by other
    /// clients; it is parsed with `parse_start_time` when it is needed.
    pub start_time: String,
    pub subject: String,
    pub venue: String,
    pub lecturer: String,
}

impl Entity for Lecture {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Time `{0}` is not in the HH:MM format")]
pub struct InvalidTimeError(pub String);

/// Parses a time of day in the `HH:MM` format, e.g. "14:30"
pub fn parse_time_of_day(time: &str) -> Result<NaiveTime, InvalidTimeError> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| InvalidTimeError(time.to_string()))
}

impl Lecture {
    pub fn new(
        day: Weekday,
        start_time: impl Into<String>,
        subject: impl Into<String>,
        venue: impl Into<String>,
        lecturer: impl Into<String>,
    ) -> Self {
        Self {
            id: Default::default(),
            day,
            start_time: start_time.into(),
            subject: subject.into(),
            venue: venue.into(),
            lecturer: lecturer.into(),
        }
    }

    pub fn parse_start_time(&self) -> Result<NaiveTime, InvalidTimeError> {
        parse_time_of_day(&self.start_time)
    }

    /// Message shown to the user `lead_time` before the lecture starts
    pub fn reminder_message(&self, lead_time: &LeadTime) -> String {
        format!(
            "'{}' by {} at {} in {} at {}",
            self.subject, self.lecturer, self.venue, lead_time.label, self.start_time
        )
    }
}

impl Display for Lecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | {} {} - {} @ {} by {}",
            self.id,
            weekday_label(self.day),
            self.start_time,
            self.subject,
            self.venue,
            self.lecturer
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_times() {
        let valid_times = vec!["00:00", "9:05", "14:30", "23:59"];

        for time in &valid_times {
            assert!(parse_time_of_day(time).is_ok(), "{}", time);
        }
        assert_eq!(
            parse_time_of_day("14:30"),
            Ok(NaiveTime::from_hms_opt(14, 30, 0).unwrap())
        );
    }

    #[test]
    fn it_rejects_invalid_times() {
        let invalid_times = vec!["", "24:00", "14:60", "14", "2pm", "14:30:00", "ab:cd"];

        for time in &invalid_times {
            assert!(parse_time_of_day(time).is_err(), "{}", time);
        }
    }

    #[test]
    fn it_formats_reminder_message() {
        let lecture = Lecture::new(Weekday::Mon, "14:30", "Algorithms", "Room 101", "Dr. Smith");
        assert_eq!(
            lecture.reminder_message(&LeadTime::new(60)),
            "'Algorithms' by Dr. Smith at Room 101 in 1 hour at 14:30"
        );
    }

    #[test]
    fn it_displays_as_list_line() {
        let lecture = Lecture::new(Weekday::Wed, "09:00", "Compilers", "Hall B", "Prof. Lee");
        assert_eq!(
            lecture.to_string(),
            format!(
                "ID: {} | Wednesday 09:00 - Compilers @ Hall B by Prof. Lee",
                lecture.id
            )
        );
    }
}
