use std::path::{Path, PathBuf};
use std::fs;
use crate::config::constants::CONFIG_FILE_NAME;
use crate::errors::{IntelliCodeError, IntelliCodeResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::config::Config;
use crate::structs::config_report::ConfigReport;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> PathBuf {
        ConfigHelper::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn load() -> IntelliCodeResult<Config> {
        Self::load_from(&Self::config_path())
    }

    /// A missing file is not an error; defaults apply.
    pub fn load_from(path: &Path) -> IntelliCodeResult<Config> {
        if !path.exists() {
            log::debug!("📋 No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::debug!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| IntelliCodeError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn sample_config() -> String {
        let data_dir = ConfigHelper::default_data_dir();
        format!(r#"# IntelliCode Configuration

[storage]
# Where history and settings are kept (one JSON file per key)
data_dir = "{}"

[analysis]
# Show the progress bar before results
simulate_progress = true

# Milliseconds between progress updates
progress_tick_ms = 200

# Pause after reaching 100%
settle_ms = 500

[output]
# Directory exports are written to
output_dir = "./intellicode-exports"
"#, data_dir.display().to_string().replace('\\', "/"))
    }

    pub fn create_sample_config() -> IntelliCodeResult<PathBuf> {
        let config_dir = ConfigHelper::config_dir();
        let config_path = Self::config_path();

        if config_path.exists() {
            return Err(IntelliCodeError::config_error(
                "configuration file already exists",
                None,
                Some(&format!("Edit {} directly or remove it first", config_path.display())),
            ));
        }

        fs::create_dir_all(&config_dir)
            .map_err(|e| IntelliCodeError::file_error(&config_dir.display().to_string(), "create directory", &e.to_string()))?;
        fs::write(&config_path, Self::sample_config())
            .map_err(|e| IntelliCodeError::file_error(&config_path.display().to_string(), "write config", &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", config_path.display());
        Ok(config_path)
    }

    pub fn validate_config(config: &Config) -> ConfigReport {
        let mut report = ConfigReport::default();

        if config.storage.data_dir.as_os_str().is_empty() {
            report.error("storage.data_dir must not be empty");
        } else if config.storage.data_dir.is_file() {
            report.error(format!("storage.data_dir is a file: {}", config.storage.data_dir.display()));
        }

        if config.output.output_dir.is_file() {
            report.error(format!("output.output_dir is a file: {}", config.output.output_dir.display()));
        }

        if config.analysis.simulate_progress && config.analysis.progress_tick_ms == 0 {
            report.warn("analysis.progress_tick_ms is 0; progress will jump straight to 100%");
        }

        if config.analysis.settle_ms > 10_000 {
            report.warn(format!("analysis.settle_ms is {}ms; every analysis will pause that long", config.analysis.settle_ms));
        }

        report
    }
}
