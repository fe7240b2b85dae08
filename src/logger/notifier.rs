use crate::enums::notification_kind::NotificationKind;

/// Transient user notifications, routed through the log.
pub struct Notifier;

impl Notifier {
    pub fn notify(message: &str, kind: NotificationKind) {
        let line = Self::line(message, kind);
        match kind {
            NotificationKind::Success | NotificationKind::Info => log::info!("{}", line),
            NotificationKind::Warning => log::warn!("{}", line),
            NotificationKind::Error => log::error!("{}", line),
        }
    }

    pub fn line(message: &str, kind: NotificationKind) -> String {
        let icon = match kind {
            NotificationKind::Success => "✅",
            NotificationKind::Info => "ℹ️",
            NotificationKind::Warning => "⚠️",
            NotificationKind::Error => "❌",
        };
        format!("{} {}", icon, message)
    }
}
