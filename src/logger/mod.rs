pub mod progress_logger;
pub mod analysis_logger;
pub mod notifier;
