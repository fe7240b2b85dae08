pub mod json_formatter;
pub mod csv_formatter;
pub mod report_formatter;

use std::fs;
use std::path::{Path, PathBuf};
use crate::enums::export_format::ExportFormat;
use crate::errors::{IntelliCodeError, IntelliCodeResult};
use crate::services::export::csv_formatter::CsvFormatter;
use crate::services::export::json_formatter::JsonFormatter;
use crate::services::export::report_formatter::ReportFormatter;
use crate::structs::analysis_record::AnalysisRecord;
use crate::traits::export_formatter::ExportFormatter;

pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    pub fn formatter_for(format: ExportFormat) -> Box<dyn ExportFormatter> {
        match format {
            ExportFormat::Json => Box::new(JsonFormatter),
            ExportFormat::Csv => Box::new(CsvFormatter),
            ExportFormat::Report => Box::new(ReportFormatter),
        }
    }

    pub fn render(record: &AnalysisRecord, format: ExportFormat) -> IntelliCodeResult<String> {
        Self::formatter_for(format).format(record)
    }

    /// Writes the export and returns the path of the created file.
    pub fn export(&self, record: &AnalysisRecord, format: ExportFormat) -> IntelliCodeResult<PathBuf> {
        let formatter = Self::formatter_for(format);
        let content = formatter.format(record)?;
        let path = self.output_dir.join(formatter.file_name(record));

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| IntelliCodeError::file_error(&Self::display(&self.output_dir), "create directory", &e.to_string()))?;
        fs::write(&path, content)
            .map_err(|e| IntelliCodeError::file_error(&Self::display(&path), "write export", &e.to_string()))?;

        log::debug!("📤 Wrote {} export to {}", format, path.display());
        Ok(path)
    }

    fn display(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }
}
