pub mod language;
pub mod issue_kind;
pub mod issue_severity;
pub mod export_format;
pub mod notification_kind;
pub mod commands;
pub mod settings_action;
pub mod storage_error;
