pub mod config;
pub mod storage_config;
pub mod analysis_config;
pub mod output_config;
