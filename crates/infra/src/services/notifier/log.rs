use super::{INotifier, Notification};
use tracing::info;

/// Writes notifications to the log instead of showing them
pub struct LogNotifier {}

#[async_trait::async_trait]
impl INotifier for LogNotifier {
    async fn notify(&self, notification: &Notification) -> anyhow::Result<()> {
        info!(
            title = %notification.title,
            "Notification: {}",
            notification.message
        );
        Ok(())
    }
}
