use crate::errors::IntelliCodeResult;
use crate::structs::analysis_record::AnalysisRecord;

pub trait ExportFormatter {
    fn format(&self, record: &AnalysisRecord) -> IntelliCodeResult<String>;

    /// File name the export is written under.
    fn file_name(&self, record: &AnalysisRecord) -> String;
}
