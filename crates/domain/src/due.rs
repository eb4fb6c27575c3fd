use crate::lead_time::LeadTime;
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use std::collections::BTreeSet;

/// Decides which reminders of a lecture taking place today should be sent
/// right now.
///
/// A reminder for `LeadTime` L is due when the current time, compared with
/// minute resolution, is at most `tolerance` before `start - L` and not yet
/// past it. Reminders whose window has passed are never sent afterwards.
#[derive(Debug, Clone)]
pub struct DueSetCalculator<'a> {
    lead_times: &'a [LeadTime],
    tolerance: Duration,
}

impl<'a> DueSetCalculator<'a> {
    pub fn new(lead_times: &'a [LeadTime], tolerance: Duration) -> Self {
        Self {
            lead_times,
            tolerance,
        }
    }

    /// Returns the lead times that are due at `now` for a lecture starting
    /// at `start_time` on the date of `now`, leaving out the ones in
    /// `already_sent` (minutes of the lead times already sent for this occurrence).
    /// The result keeps the configured order of the lead times.
    pub fn newly_due(
        &self,
        start_time: NaiveTime,
        now: NaiveDateTime,
        already_sent: Option<&BTreeSet<u32>>,
    ) -> Vec<&'a LeadTime> {
        let now = truncate_to_minute(now);
        let starts_at = now.date().and_time(start_time);

        self.lead_times
            .iter()
            .filter(|lead_time| {
                let notify_at = starts_at - lead_time.duration();
                let until_notify = notify_at - now;
                until_notify >= Duration::zero() && until_notify <= self.tolerance
            })
            .filter(|lead_time| {
                already_sent
                    .map(|sent| !sent.contains(&lead_time.minutes))
                    .unwrap_or(true)
            })
            .collect()
    }
}

fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt - Duration::seconds(i64::from(dt.second()))
        - Duration::nanoseconds(i64::from(dt.nanosecond()))
}
