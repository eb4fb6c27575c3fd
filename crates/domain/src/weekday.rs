use chrono::Weekday;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("`{0}` is not a day of the week")]
pub struct InvalidWeekdayError(pub String);

/// Full english name of the weekday, e.g. "Monday".
/// This is the label lectures are stored and queried by.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Accepts full or three letter weekday names, case insensitive
pub fn parse_weekday(label: &str) -> Result<Weekday, InvalidWeekdayError> {
    label
        .trim()
        .parse::<Weekday>()
        .map_err(|_| InvalidWeekdayError(label.to_string()))
}
