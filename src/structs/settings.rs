use serde::{Deserialize, Serialize};
use crate::enums::export_format::ExportFormat;
use crate::errors::{IntelliCodeError, IntelliCodeResult};
use crate::helpers::config_helper::ConfigHelper;

/// User preferences. Every field falls back to its default on its own, so a
/// partially saved document overlays the defaults instead of replacing them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "ConfigHelper::default_strict_mode")]
    pub strict_mode: bool,

    #[serde(default = "ConfigHelper::default_auto_save")]
    pub auto_save: bool,

    #[serde(default = "ConfigHelper::default_show_line_numbers")]
    pub show_line_numbers: bool,

    #[serde(default = "ConfigHelper::default_email_notifications")]
    pub email_notifications: bool,

    #[serde(default = "ConfigHelper::default_security_alerts")]
    pub security_alerts: bool,

    #[serde(default = "ConfigHelper::default_export_format")]
    pub export_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict_mode: ConfigHelper::default_strict_mode(),
            auto_save: ConfigHelper::default_auto_save(),
            show_line_numbers: ConfigHelper::default_show_line_numbers(),
            email_notifications: ConfigHelper::default_email_notifications(),
            security_alerts: ConfigHelper::default_security_alerts(),
            export_format: ConfigHelper::default_export_format(),
        }
    }
}

impl Settings {
    pub const KEYS: [&'static str; 6] = [
        "strictMode",
        "autoSave",
        "showLineNumbers",
        "emailNotifications",
        "securityAlerts",
        "exportFormat",
    ];

    pub fn export_format(&self) -> ExportFormat {
        ExportFormat::from_setting(&self.export_format)
    }

    /// Returns a copy with one option changed. Keys are accepted in camelCase or snake_case.
    pub fn with_value(&self, key: &str, value: &str) -> IntelliCodeResult<Self> {
        let mut updated = self.clone();
        match key.replace('_', "").to_lowercase().as_str() {
            "strictmode" => updated.strict_mode = Self::parse_flag(key, value)?,
            "autosave" => updated.auto_save = Self::parse_flag(key, value)?,
            "showlinenumbers" => updated.show_line_numbers = Self::parse_flag(key, value)?,
            "emailnotifications" => updated.email_notifications = Self::parse_flag(key, value)?,
            "securityalerts" => updated.security_alerts = Self::parse_flag(key, value)?,
            "exportformat" => updated.export_format = ExportFormat::parse(value)?.name().to_string(),
            _ => {
                return Err(IntelliCodeError::invalid_input(
                    key,
                    "a settings key",
                    &format!("Known keys: {}", Self::KEYS.join(", ")),
                ));
            }
        }
        Ok(updated)
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("strictMode", self.strict_mode.to_string()),
            ("autoSave", self.auto_save.to_string()),
            ("showLineNumbers", self.show_line_numbers.to_string()),
            ("emailNotifications", self.email_notifications.to_string()),
            ("securityAlerts", self.security_alerts.to_string()),
            ("exportFormat", self.export_format.clone()),
        ]
    }

    fn parse_flag(key: &str, value: &str) -> IntelliCodeResult<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(true),
            "false" | "off" | "no" | "0" => Ok(false),
            _ => Err(IntelliCodeError::invalid_input(
                value,
                &format!("true or false for '{}'", key),
                "Boolean options accept true/false, on/off, yes/no",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_overlays_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"autoSave": false, "exportFormat": "csv"}"#).unwrap();
        assert!(!settings.auto_save);
        assert!(settings.show_line_numbers);
        assert!(settings.security_alerts);
        assert_eq!(settings.export_format(), ExportFormat::Csv);
    }

    #[test]
    fn test_with_value_accepts_both_key_styles() {
        let settings = Settings::default()
            .with_value("strict_mode", "on").unwrap()
            .with_value("exportFormat", "JSON").unwrap();
        assert!(settings.strict_mode);
        assert_eq!(settings.export_format, "json");
    }

    #[test]
    fn test_with_value_rejects_unknown_key_and_bad_flag() {
        assert!(matches!(
            Settings::default().with_value("theme", "dark"),
            Err(IntelliCodeError::InvalidInput { .. })
        ));
        assert!(Settings::default().with_value("autoSave", "maybe").is_err());
        assert!(Settings::default().with_value("exportFormat", "xml").is_err());
    }

    #[test]
    fn test_default_export_is_report() {
        assert_eq!(Settings::default().export_format(), ExportFormat::Report);
    }
}
