use crate::{lead_time::LeadTime, occurrence::OccurrenceKey};
use chrono::Weekday;
use std::collections::{BTreeSet, HashMap};

/// Keeps track of which reminders have already been sent for each
/// `OccurrenceKey`, so that a reminder is never sent twice for the same
/// lecture, lead time and day.
///
/// Only occurrences of the current day are kept, everything else is
/// removed with `prune_stale_days`.
#[derive(Debug, Default)]
pub struct SentTracker {
    /// Minutes of the `LeadTime`s that have been sent per occurrence
    sent: HashMap<OccurrenceKey, BTreeSet<u32>>,
}

impl SentTracker {
    pub fn new() -> Self {
        Default::default()
    }

    /// Records that the reminder for `lead_time` has been sent.
    /// Returns false if it was already recorded.
    pub fn mark_sent(&mut self, key: &OccurrenceKey, lead_time: &LeadTime) -> bool {
        self.sent
            .entry(key.clone())
            .or_default()
            .insert(lead_time.minutes)
    }

    pub fn is_sent(&self, key: &OccurrenceKey, lead_time: &LeadTime) -> bool {
        self.sent
            .get(key)
            .map(|minutes| minutes.contains(&lead_time.minutes))
            .unwrap_or(false)
    }

    /// Minutes of the lead times already sent for the occurrence
    pub fn sent_for(&self, key: &OccurrenceKey) -> Option<&BTreeSet<u32>> {
        self.sent.get(key)
    }

    /// Removes every occurrence which does not belong to `today`.
    /// Returns the number of occurrences removed.
    pub fn prune_stale_days(&mut self, today: Weekday) -> usize {
        let before = self.sent.len();
        self.sent.retain(|key, _| key.day == today);
        before - self.sent.len()
    }

    pub fn len(&self) -> usize {
        self.sent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entity::ID;

    #[test]
    fn mark_sent_is_idempotent() {
        let mut tracker = SentTracker::new();
        let key = OccurrenceKey::new(ID::new(), Weekday::Mon);
        let lead = LeadTime::new(60);

        assert!(!tracker.is_sent(&key, &lead));
        assert!(tracker.mark_sent(&key, &lead));
        assert!(!tracker.mark_sent(&key, &lead));
        assert!(tracker.is_sent(&key, &lead));
        assert_eq!(tracker.sent_for(&key).map(|s| s.len()), Some(1));
        assert!(!tracker.is_sent(&key, &LeadTime::new(45)));
    }

    #[test]
    fn occurrences_are_tracked_independently() {
        let mut tracker = SentTracker::new();
        let first = OccurrenceKey::new(ID::new(), Weekday::Mon);
        let second = OccurrenceKey::new(ID::new(), Weekday::Mon);
        let lead = LeadTime::new(30);

        tracker.mark_sent(&first, &lead);
        assert!(tracker.is_sent(&first, &lead));
        assert!(!tracker.is_sent(&second, &lead));
    }

    #[test]
    fn prunes_other_days() {
        let mut tracker = SentTracker::new();
        let lecture_id = ID::new();
        let monday = OccurrenceKey::new(lecture_id.clone(), Weekday::Mon);
        let tuesday = OccurrenceKey::new(lecture_id, Weekday::Tue);
        let lead = LeadTime::new(15);
        tracker.mark_sent(&monday, &lead);
        tracker.mark_sent(&tuesday, &lead);

        assert_eq!(tracker.prune_stale_days(Weekday::Tue), 1);
        assert!(!tracker.is_sent(&monday, &lead));
        assert!(tracker.is_sent(&tuesday, &lead));
    }

    #[test]
    fn prune_is_idempotent() {
        let mut tracker = SentTracker::new();
        let lead = LeadTime::new(15);
        tracker.mark_sent(&OccurrenceKey::new(ID::new(), Weekday::Mon), &lead);
        tracker.mark_sent(&OccurrenceKey::new(ID::new(), Weekday::Sun), &lead);

        assert_eq!(tracker.prune_stale_days(Weekday::Sun), 1);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.prune_stale_days(Weekday::Sun), 0);
        assert_eq!(tracker.len(), 1);
    }
}
