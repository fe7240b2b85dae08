use std::path::PathBuf;
use crate::config::constants::{CONFIG_DIR_NAME, DEFAULT_PROGRESS_TICK_MS, DEFAULT_SETTLE_MS};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR_NAME))
    }

    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join(CONFIG_DIR_NAME))
            .unwrap_or_else(|| Self::config_dir().join("data"))
    }

    pub fn default_output_dir() -> PathBuf {
        PathBuf::from("./intellicode-exports")
    }

    pub fn default_simulate_progress() -> bool {
        true
    }

    pub fn default_progress_tick_ms() -> u64 {
        DEFAULT_PROGRESS_TICK_MS
    }

    pub fn default_settle_ms() -> u64 {
        DEFAULT_SETTLE_MS
    }

    pub fn default_strict_mode() -> bool {
        false
    }

    pub fn default_auto_save() -> bool {
        true
    }

    pub fn default_show_line_numbers() -> bool {
        true
    }

    pub fn default_email_notifications() -> bool {
        false
    }

    pub fn default_security_alerts() -> bool {
        true
    }

    pub fn default_export_format() -> String {
        "pdf".to_string()
    }
}
