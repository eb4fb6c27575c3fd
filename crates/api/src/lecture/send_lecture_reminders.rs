use crate::shared::usecase::UseCase;
use chrono::Datelike;
use lecture_reminder_domain::{DueSetCalculator, OccurrenceKey, SentTracker};
use lecture_reminder_infra::{Notification, ReminderContext};
use tracing::{error, info, warn};

pub const NOTIFICATION_TITLE: &str = "Lecture Reminder";

/// One run of the reminder job: sends every reminder that is due right now
/// for the lectures taking place today and records it in the `SentTracker`.
///
/// A reminder is marked as sent even if the notifier failed, so it is
/// attempted at most once per lecture, lead time and day.
#[derive(Debug)]
pub struct SendLectureRemindersUseCase<'a> {
    pub sent: &'a mut SentTracker,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TickSummary {
    /// Lectures of today that were looked at
    pub evaluated: usize,
    pub sent: usize,
    pub failed: usize,
    /// Lectures left out because of an invalid start time
    pub skipped: usize,
    /// Occurrences of earlier days removed from the tracker
    pub pruned: usize,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait]
impl<'a> UseCase for SendLectureRemindersUseCase<'a> {
    type Response = TickSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "SendLectureReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_local_datetime();
        let today = now.weekday();

        let mut summary = TickSummary {
            pruned: self.sent.prune_stale_days(today),
            ..Default::default()
        };

        let lectures = ctx
            .repos
            .lectures
            .find_by_day(today)
            .await
            .map_err(|e| {
                error!("Unable to read the lectures of today: {:?}", e);
                UseCaseError::StorageError
            })?;

        let calculator =
            DueSetCalculator::new(&ctx.config.lead_times, ctx.config.tolerance_window);

        for lecture in lectures {
            summary.evaluated += 1;
            let start_time = match lecture.parse_start_time() {
                Ok(start_time) => start_time,
                Err(e) => {
                    warn!("Skipping {}: {}", lecture, e);
                    summary.skipped += 1;
                    continue;
                }
            };

            let key = OccurrenceKey::new(lecture.id.clone(), today);
            let due = calculator.newly_due(start_time, now, self.sent.sent_for(&key));
            for lead_time in due {
                let notification =
                    Notification::new(NOTIFICATION_TITLE, lecture.reminder_message(lead_time));
                match ctx.notifier.notify(&notification).await {
                    Ok(_) => summary.sent += 1,
                    Err(e) => {
                        error!(
                            "Unable to send the {} reminder of {}: {:?}",
                            lead_time.label, lecture, e
                        );
                        summary.failed += 1;
                    }
                }
                self.sent.mark_sent(&key, lead_time);
            }
        }

        if summary.sent + summary.failed > 0 || summary.pruned > 0 {
            info!(
                evaluated = summary.evaluated,
                sent = summary.sent,
                failed = summary.failed,
                skipped = summary.skipped,
                pruned = summary.pruned,
                "Reminder tick done"
            );
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime, Weekday};
    use lecture_reminder_domain::{Lecture, ID};
    use lecture_reminder_infra::{ILectureRepo, INotifier, ISys, ManualSys};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingNotifier {
        notifications: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.notifications
                .lock()
                .unwrap()
                .iter()
                .map(|n| n.message.clone())
                .collect()
        }
    }

    #[async_trait::async_trait]
    impl INotifier for RecordingNotifier {
        async fn notify(&self, notification: &Notification) -> anyhow::Result<()> {
            self.notifications.lock().unwrap().push(notification.clone());
            Ok(())
        }
    }

    struct FailingNotifier {}

    #[async_trait::async_trait]
    impl INotifier for FailingNotifier {
        async fn notify(&self, _: &Notification) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("Notification service unavailable"))
        }
    }

    struct FailingLectureRepo {}

    #[async_trait::async_trait]
    impl ILectureRepo for FailingLectureRepo {
        async fn insert(&self, _: &Lecture) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("Database is locked"))
        }
        async fn find(&self, _: &ID) -> Option<Lecture> {
            None
        }
        async fn find_all(&self) -> anyhow::Result<Vec<Lecture>> {
            Err(anyhow::anyhow!("Database is locked"))
        }
        async fn find_by_day(&self, _: Weekday) -> anyhow::Result<Vec<Lecture>> {
            Err(anyhow::anyhow!("Database is locked"))
        }
        async fn delete(&self, _: &ID) -> anyhow::Result<Option<Lecture>> {
            Err(anyhow::anyhow!("Database is locked"))
        }
    }

    struct TestContext {
        ctx: ReminderContext,
        sys: Arc<ManualSys>,
        notifier: Arc<RecordingNotifier>,
    }

    // Monday 22nd of February 2021
    fn monday_at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 2, 22)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    fn setup(now: NaiveDateTime) -> TestContext {
        let mut ctx = ReminderContext::create_inmemory();
        let sys = Arc::new(ManualSys::new(now));
        let notifier = Arc::new(RecordingNotifier::default());
        ctx.sys = sys.clone();
        ctx.notifier = notifier.clone();
        TestContext { ctx, sys, notifier }
    }

    async fn insert_algorithms(ctx: &ReminderContext) -> Lecture {
        let lecture = Lecture::new(Weekday::Mon, "14:30", "Algorithms", "Room 101", "Dr. Smith");
        ctx.repos.lectures.insert(&lecture).await.unwrap();
        lecture
    }

    async fn tick(sent: &mut SentTracker, ctx: &ReminderContext) -> TickSummary {
        let mut usecase = SendLectureRemindersUseCase { sent };
        usecase.execute(ctx).await.expect("Tick to succeed")
    }

    #[actix_web::main]
    #[test]
    async fn sends_each_reminder_once() {
        let TestContext { ctx, sys, notifier } = setup(monday_at(13, 30, 0));
        insert_algorithms(&ctx).await;
        let mut sent = SentTracker::new();

        let summary = tick(&mut sent, &ctx).await;
        assert_eq!(summary.evaluated, 1);
        assert_eq!(summary.sent, 1);
        assert_eq!(
            notifier.messages(),
            vec!["'Algorithms' by Dr. Smith at Room 101 in 1 hour at 14:30".to_string()]
        );

        // Same minute, nothing new
        sys.set(monday_at(13, 30, 40));
        let summary = tick(&mut sent, &ctx).await;
        assert_eq!(summary.sent, 0);

        sys.set(monday_at(13, 45, 10));
        tick(&mut sent, &ctx).await;
        assert_eq!(notifier.messages().len(), 2);
        assert!(notifier.messages()[1].contains("in 45 minutes"));
    }

    #[actix_web::main]
    #[test]
    async fn sends_every_lead_time_over_the_day() {
        let TestContext { ctx, sys, notifier } = setup(monday_at(12, 0, 0));
        insert_algorithms(&ctx).await;
        let mut sent = SentTracker::new();

        while sys.get_local_datetime() < monday_at(15, 0, 0) {
            tick(&mut sent, &ctx).await;
            sys.advance(Duration::seconds(30));
        }

        let messages = notifier.messages();
        assert_eq!(messages.len(), 4);
        for (message, label) in messages
            .iter()
            .zip(&["1 hour", "45 minutes", "30 minutes", "15 minutes"])
        {
            assert!(message.contains(label), "{}", message);
        }
        for notification in notifier.notifications.lock().unwrap().iter() {
            assert_eq!(notification.title, NOTIFICATION_TITLE);
        }
    }

    #[actix_web::main]
    #[test]
    async fn keeps_lectures_at_the_same_time_apart() {
        let TestContext { ctx, notifier, .. } = setup(monday_at(13, 30, 0));
        let algorithms = insert_algorithms(&ctx).await;
        let other = Lecture::new(Weekday::Mon, "14:30", "Algorithms", "Room 202", "Dr. Smith");
        ctx.repos.lectures.insert(&other).await.unwrap();
        let mut sent = SentTracker::new();

        let summary = tick(&mut sent, &ctx).await;
        assert_eq!(summary.sent, 2);
        assert_eq!(notifier.messages().len(), 2);
        assert_eq!(sent.len(), 2);
        assert!(sent
            .sent_for(&OccurrenceKey::new(algorithms.id, Weekday::Mon))
            .is_some());
        assert!(sent
            .sent_for(&OccurrenceKey::new(other.id, Weekday::Mon))
            .is_some());
    }

    #[actix_web::main]
    #[test]
    async fn ignores_lectures_of_other_days() {
        let TestContext { ctx, notifier, .. } = setup(monday_at(13, 30, 0));
        let lecture = Lecture::new(Weekday::Tue, "14:30", "Algorithms", "Room 101", "Dr. Smith");
        ctx.repos.lectures.insert(&lecture).await.unwrap();
        let mut sent = SentTracker::new();

        let summary = tick(&mut sent, &ctx).await;
        assert_eq!(summary, TickSummary::default());
        assert!(notifier.messages().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn marks_failed_reminders_as_sent() {
        let TestContext { mut ctx, sys, .. } = setup(monday_at(13, 30, 0));
        ctx.notifier = Arc::new(FailingNotifier {});
        let algorithms = insert_algorithms(&ctx).await;
        let databases = Lecture::new(Weekday::Mon, "14:15", "Databases", "Room 7", "Dr. Jones");
        ctx.repos.lectures.insert(&databases).await.unwrap();
        let mut sent = SentTracker::new();

        sys.set(monday_at(13, 30, 0));
        let summary = tick(&mut sent, &ctx).await;
        // 60 minutes before Algorithms and 45 minutes before Databases
        assert_eq!(summary.evaluated, 2);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.sent, 0);

        let summary = tick(&mut sent, &ctx).await;
        assert_eq!(summary.failed, 0);
        assert!(sent
            .sent_for(&OccurrenceKey::new(algorithms.id, Weekday::Mon))
            .map(|minutes| minutes.contains(&60))
            .unwrap_or(false));
        assert!(sent
            .sent_for(&OccurrenceKey::new(databases.id, Weekday::Mon))
            .map(|minutes| minutes.contains(&45))
            .unwrap_or(false));
    }

    #[actix_web::main]
    #[test]
    async fn skips_lectures_with_invalid_start_time() {
        let TestContext { ctx, notifier, .. } = setup(monday_at(13, 30, 0));
        let broken = Lecture::new(Weekday::Mon, "half past two", "Broken", "Room 0", "Nobody");
        ctx.repos.lectures.insert(&broken).await.unwrap();
        insert_algorithms(&ctx).await;
        let mut sent = SentTracker::new();

        let summary = tick(&mut sent, &ctx).await;
        assert_eq!(summary.evaluated, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.sent, 1);
        assert_eq!(notifier.messages().len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn skips_tick_when_lectures_can_not_be_read() {
        let TestContext { mut ctx, notifier, .. } = setup(monday_at(13, 30, 0));
        ctx.repos.lectures = Arc::new(FailingLectureRepo {});
        let mut sent = SentTracker::new();

        let mut usecase = SendLectureRemindersUseCase { sent: &mut sent };
        let res = usecase.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::StorageError)));
        assert!(notifier.messages().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn forgets_sent_reminders_of_yesterday() {
        let TestContext { ctx, sys, notifier } = setup(monday_at(13, 30, 0));
        let monday = insert_algorithms(&ctx).await;
        let tuesday = Lecture::new(Weekday::Tue, "14:30", "Algorithms", "Room 101", "Dr. Smith");
        ctx.repos.lectures.insert(&tuesday).await.unwrap();
        let mut sent = SentTracker::new();

        tick(&mut sent, &ctx).await;
        assert_eq!(sent.len(), 1);

        sys.set(monday_at(13, 30, 0) + Duration::days(1));
        let summary = tick(&mut sent, &ctx).await;
        assert_eq!(summary.pruned, 1);
        assert_eq!(summary.sent, 1);
        assert_eq!(notifier.messages().len(), 2);
        assert!(sent
            .sent_for(&OccurrenceKey::new(monday.id, Weekday::Mon))
            .is_none());
        assert_eq!(sent.len(), 1);
    }
}
