use chrono::NaiveDateTime;
use lecture_reminder_api::{Application, ReminderScheduler};
use lecture_reminder_infra::{ManualSys, ReminderContext};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub scheduler: Arc<ReminderScheduler>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }
}

// Launch the application as a background task
pub async fn spawn_app(now: NaiveDateTime) -> TestApp {
    let mut ctx = ReminderContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.sys = Arc::new(ManualSys::new(now));

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let scheduler = application.scheduler();
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp {
        address,
        client: reqwest::Client::new(),
        scheduler,
    }
}
