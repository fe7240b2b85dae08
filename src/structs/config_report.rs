use crate::enums::notification_kind::NotificationKind;
use crate::logger::notifier::Notifier;

/// Problems found while checking a loaded configuration.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConfigReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ConfigReport {
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Warnings never make a configuration invalid.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn notify(&self) {
        for error in &self.errors {
            Notifier::notify(error, NotificationKind::Error);
        }
        for warning in &self.warnings {
            Notifier::notify(warning, NotificationKind::Warning);
        }
        if self.is_valid() {
            Notifier::notify(&format!("Configuration is valid ({} warning(s))", self.warnings.len()), NotificationKind::Success);
        }
    }
}
