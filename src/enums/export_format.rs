use std::fmt;
use crate::errors::{IntelliCodeError, IntelliCodeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Report,  // Plain-text report, the "pdf" setting
}

impl ExportFormat {
    /// Anything other than `json` or `csv` selects the text report.
    pub fn from_setting(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => ExportFormat::Json,
            "csv" => ExportFormat::Csv,
            _ => ExportFormat::Report,
        }
    }

    /// Strict form for values typed by the user; `pdf` names the text report.
    pub fn parse(value: &str) -> IntelliCodeResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Report),
            _ => Err(IntelliCodeError::invalid_input(value, "one of json, csv, pdf", "Use 'pdf' for the text report")),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Report => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
