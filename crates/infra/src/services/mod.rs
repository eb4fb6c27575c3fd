mod notifier;

pub use notifier::{DesktopNotifier, INotifier, LogNotifier, Notification};
