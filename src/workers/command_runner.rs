use std::fs;
use std::path::Path;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::export_format::ExportFormat;
use crate::enums::language::Language;
use crate::enums::notification_kind::NotificationKind;
use crate::enums::settings_action::SettingsAction;
use crate::errors::{IntelliCodeError, IntelliCodeResult};
use crate::helpers::sample_code::sample_for;
use crate::logger::analysis_logger::AnalysisLogger;
use crate::logger::notifier::Notifier;
use crate::logger::progress_logger::ProgressLogger;
use crate::services::analysis_manager::AnalysisManager;
use crate::services::export::Exporter;
use crate::services::storage::file_store::FileStore;
use crate::structs::config::config::Config;
use crate::traits::random_source::ThreadRandom;

type FileBackedManager = AnalysisManager<FileStore, ThreadRandom>;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> IntelliCodeResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Analyze { code, file, sample, language, save, export } => {
                self.analyze_command(code, file.as_deref(), sample, language, save, export).await
            }
            Commands::Sample { language } => self.sample_command(&language),
            Commands::History { limit } => self.history_command(limit),
            Commands::Dashboard => self.dashboard_command(),
            Commands::Export { id, format } => self.export_command(id, format),
            Commands::Settings { action } => self.settings_command(action),
            Commands::Clear => self.clear_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn open_manager(config: &Config) -> FileBackedManager {
        AnalysisManager::load(FileStore::new(&config.storage.data_dir), ThreadRandom)
    }

    fn init_command(&self) -> IntelliCodeResult<()> {
        log::info!("🚀 Initializing intellicode configuration...");
        ConfigManager::create_sample_config()?;
        log::info!("📝 Edit the configuration file to change storage and export locations.");
        log::info!("🔧 Run 'intellicode validate' to check your configuration.");
        Ok(())
    }

    async fn analyze_command(
        &self,
        code: Option<String>,
        file: Option<&Path>,
        sample: bool,
        language: Option<String>,
        save: bool,
        export: Option<String>,
    ) -> IntelliCodeResult<()> {
        let export = export.as_deref().map(ExportFormat::parse).transpose()?;
        let config = ConfigManager::load()?;
        let (source_text, language) = Self::resolve_input(code, file, sample, language)?;

        // Reject blank input before the progress bar runs.
        if source_text.trim().is_empty() {
            return Err(IntelliCodeError::invalid_input("<blank>", "non-empty source code", "Please enter some code to analyze."));
        }

        let mut manager = Self::open_manager(&config);

        if config.analysis.simulate_progress {
            ProgressLogger::new(
                format!("🔍 Analyzing {} code", language),
                config.analysis.progress_tick_ms,
                config.analysis.settle_ms,
            )
            .simulate()
            .await;
        }

        let record = manager.analyze(&source_text, language.tag())?;
        AnalysisLogger::print_analysis_results(&record, manager.settings());

        if save {
            manager.save_current()?;
        }

        if let Some(format) = export {
            let exporter = Exporter::new(&config.output.output_dir);
            let path = manager.export(&record, Some(format), &exporter)?;
            Self::notify_exported(format, &path);
        }

        Ok(())
    }

    /// Picks the source text and language from the analyze flags.
    fn resolve_input(
        code: Option<String>,
        file: Option<&Path>,
        sample: bool,
        language: Option<String>,
    ) -> IntelliCodeResult<(String, Language)> {
        let requested = language.as_deref().map(Language::from_tag);

        if let Some(path) = file {
            let content = fs::read_to_string(path)
                .map_err(|e| IntelliCodeError::file_error(&path.display().to_string(), "read", &e.to_string()))?;
            let inferred = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(Language::from_extension);
            return Ok((content, inferred.or(requested).unwrap_or_default()));
        }

        if sample {
            let language = requested.unwrap_or(Language::Python);
            let code = sample_for(language).ok_or_else(|| {
                IntelliCodeError::invalid_input(language.tag(), "a language with a built-in sample", "Use one of python, javascript, java, cpp, typescript, go, rust")
            })?;
            return Ok((code.to_string(), language));
        }

        match code {
            Some(code) => Ok((code, requested.unwrap_or_default())),
            None => Err(IntelliCodeError::invalid_input(
                "<none>",
                "--code, --file or --sample",
                "Pass the code inline, point at a file, or use the built-in sample",
            )),
        }
    }

    fn sample_command(&self, language: &str) -> IntelliCodeResult<()> {
        let language = Language::from_tag(language);
        let code = sample_for(language).ok_or_else(|| {
            IntelliCodeError::invalid_input(language.tag(), "a language with a built-in sample", "Use one of python, javascript, java, cpp, typescript, go, rust")
        })?;
        println!("{}", code);
        Ok(())
    }

    fn history_command(&self, limit: usize) -> IntelliCodeResult<()> {
        let config = ConfigManager::load()?;
        let manager = Self::open_manager(&config);
        let history = manager.history();
        AnalysisLogger::print_history(&history[..history.len().min(limit)]);
        Ok(())
    }

    fn dashboard_command(&self) -> IntelliCodeResult<()> {
        let config = ConfigManager::load()?;
        let manager = Self::open_manager(&config);
        AnalysisLogger::print_dashboard(&manager.dashboard());
        AnalysisLogger::print_history(manager.recent());
        Ok(())
    }

    fn export_command(&self, id: Option<u64>, format: Option<String>) -> IntelliCodeResult<()> {
        let format = format.as_deref().map(ExportFormat::parse).transpose()?;
        let config = ConfigManager::load()?;
        let manager = Self::open_manager(&config);

        let record = match id {
            Some(id) => manager.find(id),
            None => manager.history().first(),
        }
        .ok_or_else(|| IntelliCodeError::invalid_input(
            &id.map_or_else(|| "latest".to_string(), |id| id.to_string()),
            "a saved analysis",
            "Run 'intellicode history' to list saved analyses",
        ))?;

        let exporter = Exporter::new(&config.output.output_dir);
        let path = manager.export(record, format, &exporter)?;
        Self::notify_exported(format.unwrap_or_else(|| manager.settings().export_format()), &path);
        Ok(())
    }

    fn notify_exported(format: ExportFormat, path: &Path) {
        Notifier::notify(
            &format!("Analysis exported as {}: {}", format.name().to_uppercase(), path.display()),
            NotificationKind::Success,
        );
    }

    fn settings_command(&self, action: SettingsAction) -> IntelliCodeResult<()> {
        let config = ConfigManager::load()?;
        let mut manager = Self::open_manager(&config);

        match action {
            SettingsAction::Show => AnalysisLogger::print_settings(manager.settings()),
            SettingsAction::Set { key, value } => {
                let updated = manager.settings().with_value(&key, &value)?;
                manager.save_settings(updated);
                AnalysisLogger::print_settings(manager.settings());
            }
            SettingsAction::Reset => {
                manager.reset_settings();
                AnalysisLogger::print_settings(manager.settings());
            }
        }
        Ok(())
    }

    fn clear_command(&self) -> IntelliCodeResult<()> {
        let config = ConfigManager::load()?;
        let mut manager = Self::open_manager(&config);
        let removed = manager.history().len();
        manager.clear_all_data();
        Notifier::notify(&format!("Removed {} saved analyses", removed), NotificationKind::Info);
        Ok(())
    }

    fn validate_command(&self) -> IntelliCodeResult<()> {
        log::info!("🔍 Validating intellicode configuration...");
        let config = ConfigManager::load()?;
        log::info!("✅ Configuration file loaded from {}", ConfigManager::config_path().display());

        let report = ConfigManager::validate_config(&config);
        report.notify();
        if report.is_valid() {
            Ok(())
        } else {
            Err(IntelliCodeError::config_error(
                &format!("{} problem(s) found", report.errors.len()),
                None,
                Some("Fix the entries listed above"),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_extension_wins_over_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.rs");
        fs::write(&path, "fn main() {}").unwrap();

        let (code, language) = CommandRunner::resolve_input(None, Some(&path), false, Some("python".to_string())).unwrap();
        assert_eq!(code, "fn main() {}");
        assert_eq!(language, Language::Rust);
    }

    #[test]
    fn test_unrecognized_extension_keeps_requested_language() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "for x in y").unwrap();

        let (_, language) = CommandRunner::resolve_input(None, Some(&path), false, Some("go".to_string())).unwrap();
        assert_eq!(language, Language::Go);
        let (_, language) = CommandRunner::resolve_input(None, Some(&path), false, None).unwrap();
        assert_eq!(language, Language::Unknown);
    }

    #[test]
    fn test_sample_defaults_to_python() {
        let (code, language) = CommandRunner::resolve_input(None, None, true, None).unwrap();
        assert_eq!(language, Language::Python);
        assert!(code.contains("SELECT"));
    }

    #[tokio::test]
    async fn test_unknown_export_format_is_rejected_up_front() {
        let mut runner = CommandRunner::new();
        let analyze = Commands::Analyze {
            code: Some("x = 1".to_string()),
            file: None,
            sample: false,
            language: None,
            save: false,
            export: Some("xml".to_string()),
        };
        assert!(matches!(runner.run_command(analyze).await, Err(IntelliCodeError::InvalidInput { .. })));

        let export = Commands::Export { id: None, format: Some("docx".to_string()) };
        assert!(matches!(runner.run_command(export).await, Err(IntelliCodeError::InvalidInput { .. })));
    }

    #[test]
    fn test_no_input_is_invalid() {
        assert!(matches!(
            CommandRunner::resolve_input(None, None, false, None),
            Err(IntelliCodeError::InvalidInput { .. })
        ));
    }
}
