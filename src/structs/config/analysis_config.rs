use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AnalysisConfig {
    #[serde(default = "ConfigHelper::default_simulate_progress")]
    pub simulate_progress: bool,

    #[serde(default = "ConfigHelper::default_progress_tick_ms")]
    pub progress_tick_ms: u64,

    #[serde(default = "ConfigHelper::default_settle_ms")]
    pub settle_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            simulate_progress: ConfigHelper::default_simulate_progress(),
            progress_tick_ms: ConfigHelper::default_progress_tick_ms(),
            settle_ms: ConfigHelper::default_settle_ms(),
        }
    }
}
