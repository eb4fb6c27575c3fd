use crate::{
    lecture::send_lecture_reminders::SendLectureRemindersUseCase, shared::usecase::execute,
};
use lecture_reminder_domain::SentTracker;
use lecture_reminder_infra::ReminderContext;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("The reminder job is already running")]
    AlreadyRunning,
    #[error("The reminder job panicked: {0}")]
    WorkerPanicked(#[source] JoinError),
}

struct Worker {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

enum SchedulerState {
    Idle,
    Running(Worker),
}

/// Owns the background job which sends the lecture reminders.
///
/// Each instance owns the cancellation token of its job.
pub struct ReminderScheduler {
    ctx: ReminderContext,
    state: Mutex<SchedulerState>,
}

impl ReminderScheduler {
    pub fn new(ctx: ReminderContext) -> Self {
        Self {
            ctx,
            state: Mutex::new(SchedulerState::Idle),
        }
    }

    /// Spawns the reminder job. Fails if it is already running.
    pub async fn start(&self) -> Result<(), SchedulerError> {
        let mut state = self.state.lock().await;
        if let SchedulerState::Running(worker) = &*state {
            if !worker.handle.is_finished() {
                return Err(SchedulerError::AlreadyRunning);
            }
            warn!("The previous reminder job exited unexpectedly, starting a new one");
        }

        let cancel = CancellationToken::new();
        let handle = actix_web::rt::spawn(send_reminders_job(self.ctx.clone(), cancel.clone()));
        *state = SchedulerState::Running(Worker { cancel, handle });
        Ok(())
    }

    /// Asks the reminder job to stop and waits until it has. A tick that is
    /// dispatching reminders is allowed to finish first, and no reminder is
    /// sent after this returns. Does nothing if the job is not running.
    pub async fn stop(&self) -> Result<(), SchedulerError> {
        let mut state = self.state.lock().await;
        let worker = match std::mem::replace(&mut *state, SchedulerState::Idle) {
            SchedulerState::Idle => return Ok(()),
            SchedulerState::Running(worker) => worker,
        };

        worker.cancel.cancel();
        worker
            .handle
            .await
            .map_err(SchedulerError::WorkerPanicked)?;
        info!("Reminder job stopped");
        Ok(())
    }

    pub async fn is_running(&self) -> bool {
        match &*self.state.lock().await {
            SchedulerState::Idle => false,
            SchedulerState::Running(worker) => !worker.handle.is_finished(),
        }
    }
}

async fn send_reminders_job(ctx: ReminderContext, cancel: CancellationToken) {
    let mut sent = SentTracker::new();
    let mut poll = interval(ctx.config.poll_period);
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(
        "Reminder job started, polling every {} seconds",
        ctx.config.poll_period.as_secs_f32()
    );

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = poll.tick() => {
                let usecase = SendLectureRemindersUseCase { sent: &mut sent };
                // Failures are logged by the executor and the next tick tries again
                let _ = execute(usecase, &ctx).await;
            }
        }
    }
}
