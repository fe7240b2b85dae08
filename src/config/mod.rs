pub mod constants;
pub mod config_manager;
