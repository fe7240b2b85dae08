use std::path::PathBuf;
use crate::config::constants::RECENT_HISTORY_LIMIT;
use crate::enums::export_format::ExportFormat;
use crate::enums::notification_kind::NotificationKind;
use crate::errors::{IntelliCodeError, IntelliCodeResult};
use crate::logger::notifier::Notifier;
use crate::services::code_analyzer::CodeAnalyzer;
use crate::services::export::Exporter;
use crate::services::history_manager::HistoryManager;
use crate::services::persistence_manager::PersistenceManager;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::app_state::AppState;
use crate::structs::dashboard_stats::DashboardStats;
use crate::structs::settings::Settings;
use crate::traits::key_value_store::KeyValueStore;
use crate::traits::random_source::RandomSource;

/// Owns the application state and applies one user action at a time to it.
pub struct AnalysisManager<S: KeyValueStore, R: RandomSource> {
    state: AppState,
    persistence: PersistenceManager<S>,
    rng: R,
}

impl<S: KeyValueStore, R: RandomSource> AnalysisManager<S, R> {

    /// Loads saved history and settings, falling back to defaults.
    pub fn load(store: S, rng: R) -> Self {
        let persistence = PersistenceManager::new(store);
        let state = AppState {
            current: None,
            history: persistence.load_history(),
            settings: persistence.load_settings(),
        };
        log::debug!("📋 Loaded {} saved analyses", state.history.len());

        Self { state, persistence, rng }
    }

    pub fn analyze(&mut self, source_text: &str, language: &str) -> IntelliCodeResult<AnalysisRecord> {
        let record = CodeAnalyzer::create_record(source_text, language, &mut self.rng)?;
        self.state.current = Some(record.clone());

        if self.state.settings.auto_save {
            self.save_analysis(record.clone());
        }

        Ok(record)
    }

    pub fn save_analysis(&mut self, record: AnalysisRecord) {
        let history = std::mem::take(&mut self.state.history);
        self.state.history = HistoryManager::append_to_history(history, record);
        self.persistence.save_history(&self.state.history);
        Notifier::notify("Analysis saved successfully!", NotificationKind::Success);
    }

    /// Saves the current analysis unless it is already the newest history entry.
    pub fn save_current(&mut self) -> IntelliCodeResult<()> {
        let current = self.state.current.clone().ok_or_else(|| {
            IntelliCodeError::invalid_input("save", "an analysis to save", "Run an analysis first")
        })?;

        if self.state.history.first().map(|r| r.id) != Some(current.id) {
            self.save_analysis(current);
        }
        Ok(())
    }

    pub fn current(&self) -> Option<&AnalysisRecord> {
        self.state.current.as_ref()
    }

    pub fn history(&self) -> &[AnalysisRecord] {
        &self.state.history
    }

    pub fn recent(&self) -> &[AnalysisRecord] {
        HistoryManager::recent(&self.state.history, RECENT_HISTORY_LIMIT)
    }

    pub fn find(&self, id: u64) -> Option<&AnalysisRecord> {
        HistoryManager::find(&self.state.history, id)
    }

    pub fn dashboard(&self) -> DashboardStats {
        HistoryManager::compute_dashboard(&self.state.history)
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn save_settings(&mut self, settings: Settings) {
        self.state.settings = settings;
        self.persistence.save_settings(&self.state.settings);
        Notifier::notify("Settings saved successfully!", NotificationKind::Success);
    }

    pub fn reset_settings(&mut self) {
        self.state.settings = Settings::default();
        self.persistence.save_settings(&self.state.settings);
        Notifier::notify("Settings reset to default!", NotificationKind::Info);
    }

    pub fn clear_all_data(&mut self) {
        self.state.history.clear();
        self.state.current = None;
        self.persistence.clear_history();
        Notifier::notify("All data cleared successfully!", NotificationKind::Info);
    }

    /// Uses `format` when given, otherwise the export format from settings.
    pub fn export(&self, record: &AnalysisRecord, format: Option<ExportFormat>, exporter: &Exporter) -> IntelliCodeResult<PathBuf> {
        let format = format.unwrap_or_else(|| self.state.settings.export_format());
        exporter.export(record, format)
    }

    pub fn store(&self) -> &S {
        self.persistence.store()
    }
}
