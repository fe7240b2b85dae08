use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::settings::Settings;

/// Process-local state owned by the analysis manager.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current: Option<AnalysisRecord>,
    /// Newest first.
    pub history: Vec<AnalysisRecord>,
    pub settings: Settings,
}
