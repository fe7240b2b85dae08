pub mod heuristics;
pub mod code_analyzer;
pub mod history_manager;
pub mod storage;
pub mod persistence_manager;
pub mod export;
pub mod analysis_manager;
