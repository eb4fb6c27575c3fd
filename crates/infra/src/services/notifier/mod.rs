mod desktop;
mod log;

pub use desktop::DesktopNotifier;
pub use log::LogNotifier;

/// A message to show the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Delivers `Notification`s to the user.
///
/// Delivery is best effort: every call can fail independently and callers
/// are expected to log the error rather than retry.
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> anyhow::Result<()>;
}
