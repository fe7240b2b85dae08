use crate::errors::{IntelliCodeError, IntelliCodeResult};
use crate::helpers::format_helper::FormatHelper;
use crate::structs::analysis_record::AnalysisRecord;
use crate::traits::export_formatter::ExportFormatter;

pub const CSV_HEADER: [&str; 2] = ["Metric", "Value"];

pub struct CsvFormatter;

impl CsvFormatter {
    /// Fixed six-row schema, independent of record contents.
    pub fn rows(record: &AnalysisRecord) -> [(&'static str, String); 6] {
        [
            ("Language", record.language.to_string()),
            ("Quality Score", record.quality_score.to_string()),
            ("Security Score", record.security_score.to_string()),
            ("Lines of Code", record.lines_of_code.to_string()),
            ("Issues Found", record.issues.len().to_string()),
            ("Timestamp", FormatHelper::local_timestamp(&record.timestamp)),
        ]
    }
}

impl ExportFormatter for CsvFormatter {
    fn format(&self, record: &AnalysisRecord) -> IntelliCodeResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;
        for (metric, value) in Self::rows(record) {
            writer.write_record([metric, value.as_str()])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| IntelliCodeError::export_error("csv", &e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| IntelliCodeError::export_error("csv", &e.to_string()))
    }

    fn file_name(&self, record: &AnalysisRecord) -> String {
        format!("analysis_{}.csv", record.id)
    }
}
