use super::{INotifier, Notification};
use notify_rust::Timeout;

const APP_NAME: &str = "Lecture Reminder";
const DISPLAY_TIMEOUT_MILLIS: u32 = 10_000;

/// Shows notifications with the notification service of the desktop
pub struct DesktopNotifier {}

#[async_trait::async_trait]
impl INotifier for DesktopNotifier {
    async fn notify(&self, notification: &Notification) -> anyhow::Result<()> {
        let notification = notification.clone();
        // Talking to the notification daemon blocks
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(APP_NAME)
                .summary(&notification.title)
                .body(&notification.message)
                .timeout(Timeout::Milliseconds(DISPLAY_TIMEOUT_MILLIS))
                .show()
                .map(|_| ())
                .map_err(|e| anyhow::anyhow!("Desktop notification failed: {}", e))
        })
        .await?
    }
}
