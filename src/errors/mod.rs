use std::fmt;
use std::error::Error as StdError;
use std::future::Future;
use crate::enums::notification_kind::NotificationKind;
use crate::logger::notifier::Notifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntelliCodeError {
    // User input errors
    InvalidInput {
        input: String,
        expected: String,
        suggestion: String,
    },

    // Persistence errors, never surfaced as blocking failures
    PersistenceReadError {
        key: String,
        reason: String,
    },
    PersistenceWriteError {
        key: String,
        reason: String,
    },

    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Export errors
    ExportError {
        format: String,
        reason: String,
    },

    // Anything else caught at the top level
    UnhandledRuntimeError {
        operation: String,
        reason: String,
    },
}

impl IntelliCodeError {
    pub fn invalid_input(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn read_error(key: &str, reason: &str) -> Self {
        Self::PersistenceReadError {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write_error(key: &str, reason: &str) -> Self {
        Self::PersistenceWriteError {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn export_error(format: &str, reason: &str) -> Self {
        Self::ExportError {
            format: format.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn runtime_error(operation: &str, reason: &str) -> Self {
        Self::UnhandledRuntimeError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidInput { .. } => true,
            Self::PersistenceReadError { .. } => true,
            Self::PersistenceWriteError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::UnhandledRuntimeError { .. } => true,
            Self::ExportError { .. } => true,
            Self::ConfigurationFileError { .. } => false,
            Self::FileOperationError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnhandledRuntimeError { .. } => ErrorSeverity::High,
            Self::FileOperationError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ExportError { .. } => ErrorSeverity::Medium,
            Self::PersistenceReadError { .. } => ErrorSeverity::Medium,
            Self::PersistenceWriteError { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::InvalidInput { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { input, expected, suggestion } => {
                format!("Invalid input '{}': expected {}\n💡 {}", input, expected, suggestion)
            }
            Self::PersistenceReadError { key, reason } => {
                format!("Could not read saved '{}': {}\n💡 Defaults are used instead", key, reason)
            }
            Self::PersistenceWriteError { key, reason } => {
                format!("Could not save '{}': {}\n💡 Check permissions of the data directory", key, reason)
            }
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}\n💡 Check file permissions and path", operation, file_path, reason)
            }
            Self::ExportError { format, reason } => {
                format!("Export as {} failed: {}", format.to_uppercase(), reason)
            }
            Self::UnhandledRuntimeError { operation, reason } => {
                format!("An error occurred during {}: {}\n💡 Please try again", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for IntelliCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for IntelliCodeError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// Result type alias for intellicode operations
pub type IntelliCodeResult<T> = Result<T, IntelliCodeError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Report an error that aborts the current action only
    pub fn handle_error(error: &IntelliCodeError) {
        let severity = error.severity();
        log::debug!("[{}] {}", severity.name(), error.technical_details());

        if let IntelliCodeError::UnhandledRuntimeError { .. } = error {
            Notifier::notify("An error occurred. Please try again.", NotificationKind::Error);
            return;
        }

        log::error!("{} {}", severity.emoji(), error.user_message());
        if error.is_recoverable() {
            log::info!("🔄 You can retry the operation");
        }
    }

    /// Persistence failures degrade silently: logged, never raised to the caller
    pub fn handle_degraded(error: &IntelliCodeError) {
        log::warn!("⚠️ {}", error.user_message().replace('\n', " "));
        log::debug!("{}", error.technical_details());
    }

    /// Runs `task` on its own tokio task; a panic inside it comes back as `UnhandledRuntimeError`.
    pub async fn run_guarded<F>(operation: &str, task: F) -> IntelliCodeResult<()>
    where
        F: Future<Output = IntelliCodeResult<()>> + Send + 'static,
    {
        match tokio::spawn(task).await {
            Ok(result) => result,
            Err(join_error) => Err(IntelliCodeError::runtime_error(operation, &join_error.to_string())),
        }
    }
}

impl From<serde_json::Error> for IntelliCodeError {
    fn from(error: serde_json::Error) -> Self {
        IntelliCodeError::ExportError {
            format: "json".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<csv::Error> for IntelliCodeError {
    fn from(error: csv::Error) -> Self {
        IntelliCodeError::ExportError {
            format: "csv".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for IntelliCodeError {
    fn from(error: toml::de::Error) -> Self {
        IntelliCodeError::ConfigurationError {
            message: error.message().to_string(),
            field: None,
            suggestion: Some("Run 'intellicode init' to recreate a sample configuration".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_low_and_recoverable() {
        let error = IntelliCodeError::invalid_input("", "non-empty source code", "Paste some code");
        assert_eq!(error.severity(), ErrorSeverity::Low);
        assert!(error.is_recoverable());
        assert!(error.user_message().contains("non-empty source code"));
    }

    #[test]
    fn test_runtime_error_is_high_and_names_operation() {
        let error = IntelliCodeError::runtime_error("analyze", "task 7 panicked");
        assert_eq!(error.severity(), ErrorSeverity::High);
        assert!(error.user_message().contains("during analyze"));
    }

    async fn exploding_command() -> IntelliCodeResult<()> {
        panic!("command blew up")
    }

    async fn rejected_command() -> IntelliCodeResult<()> {
        Err(IntelliCodeError::invalid_input("", "non-empty source code", "Paste some code"))
    }

    #[tokio::test]
    async fn test_panicking_command_becomes_unhandled_runtime_error() {
        let result = ErrorHandler::run_guarded("analyze", exploding_command()).await;
        match result {
            Err(IntelliCodeError::UnhandledRuntimeError { operation, .. }) => assert_eq!(operation, "analyze"),
            other => panic!("expected UnhandledRuntimeError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_command_errors_pass_through_unchanged() {
        let result = ErrorHandler::run_guarded("analyze", rejected_command()).await;
        assert!(matches!(result, Err(IntelliCodeError::InvalidInput { .. })));
        assert!(ErrorHandler::run_guarded("noop", async { IntelliCodeResult::<()>::Ok(()) }).await.is_ok());
    }
}
