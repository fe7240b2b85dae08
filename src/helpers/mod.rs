pub mod config_helper;
pub mod sample_code;
pub mod format_helper;
