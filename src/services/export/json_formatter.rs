use crate::errors::IntelliCodeResult;
use crate::structs::analysis_record::AnalysisRecord;
use crate::traits::export_formatter::ExportFormatter;

/// Pretty-printed record, same shape as persisted history entries.
pub struct JsonFormatter;

impl ExportFormatter for JsonFormatter {
    fn format(&self, record: &AnalysisRecord) -> IntelliCodeResult<String> {
        Ok(serde_json::to_string_pretty(record)?)
    }

    fn file_name(&self, record: &AnalysisRecord) -> String {
        format!("analysis_{}.json", record.id)
    }
}
