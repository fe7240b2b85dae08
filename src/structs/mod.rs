pub mod config;
pub mod cli;
pub mod issue;
pub mod suggestion;
pub mod performance_tip;
pub mod analysis_record;
pub mod dashboard_stats;
pub mod settings;
pub mod app_state;
pub mod config_report;
