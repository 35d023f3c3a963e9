use gf_config::TrackerConfig;
use gf_core::Notifier;
use notify_rust::Notification;

/// Desktop notification sink. Delivery failures are logged and
/// dropped; nothing upstream waits on them.
pub struct DesktopNotifier;

impl DesktopNotifier {
    fn send(&self, title: &str, body: &str) {
        let result = Notification::new().summary(title).body(body).show();
        if let Err(err) = result {
            tracing::warn!(error = %err, title = %title, "desktop notification failed");
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify_entry(&self, title: &str, body: &str) {
        self.send(title, body);
    }

    fn notify_exit(&self, title: &str, body: &str) {
        self.send(title, body);
    }
}

/// Fallback sink for headless runs: transitions land in the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_entry(&self, title: &str, body: &str) {
        tracing::info!(title = %title, body = %body, "geofence entry notification");
    }

    fn notify_exit(&self, title: &str, body: &str) {
        tracing::info!(title = %title, body = %body, "geofence exit notification");
    }
}

pub fn from_config(config: &TrackerConfig) -> Box<dyn Notifier> {
    if config.desktop_notifications {
        Box::new(DesktopNotifier)
    } else {
        Box::new(LogNotifier)
    }
}

/// The user-facing alert, emitted after the notification dispatch.
pub fn alert(message: &str) {
    println!("Geofence Alert: {}", message);
}
