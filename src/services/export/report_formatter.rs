use std::fmt::Write;
use crate::errors::{IntelliCodeError, IntelliCodeResult};
use crate::helpers::format_helper::FormatHelper;
use crate::structs::analysis_record::AnalysisRecord;
use crate::traits::export_formatter::ExportFormatter;

pub const REPORT_TITLE: &str = "INTELLI-CODE SECURE - ANALYSIS REPORT";
pub const REPORT_SECTIONS: [&str; 4] = ["SCORES", "ISSUES FOUND", "REFACTORING SUGGESTIONS", "PERFORMANCE TIPS"];

/// Plain-text report, what the `pdf` export setting produces.
pub struct ReportFormatter;

impl ReportFormatter {
    fn section(out: &mut String, title: &str) -> std::fmt::Result {
        writeln!(out)?;
        writeln!(out, "{}", title)?;
        writeln!(out, "{}", "-".repeat(title.len()))
    }

    fn render(record: &AnalysisRecord) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        writeln!(out, "{}", REPORT_TITLE)?;
        writeln!(out, "{}", "=".repeat(REPORT_TITLE.len()))?;
        writeln!(out)?;
        writeln!(out, "Date: {}", FormatHelper::local_timestamp(&record.timestamp))?;
        writeln!(out, "Language: {}", record.language)?;
        writeln!(out, "Lines of Code: {}", record.lines_of_code)?;

        Self::section(&mut out, REPORT_SECTIONS[0])?;
        writeln!(out, "Quality Score: {}/100", record.quality_score)?;
        writeln!(out, "Security Score: {}/100", record.security_score)?;

        Self::section(&mut out, REPORT_SECTIONS[1])?;
        for issue in &record.issues {
            writeln!(out, "• {} (Line {}) - {}", issue.message, issue.line, issue.severity.as_str())?;
            writeln!(out, "  Suggestion: {}", issue.remediation)?;
        }

        Self::section(&mut out, REPORT_SECTIONS[2])?;
        for suggestion in &record.suggestions {
            writeln!(out, "• {}", suggestion.title)?;
            writeln!(out, "  {}", suggestion.description)?;
            writeln!(out, "  Impact: {}", suggestion.impact)?;
        }

        Self::section(&mut out, REPORT_SECTIONS[3])?;
        for tip in &record.performance_tips {
            writeln!(out, "• {}", tip.title)?;
            writeln!(out, "  {}", tip.description)?;
            writeln!(out, "  Recommendation: {}", tip.recommendation)?;
            writeln!(out, "  Expected Impact: {}", tip.impact)?;
        }

        writeln!(out)?;
        writeln!(out, "Generated by Intelli-Code Secure")?;
        Ok(out)
    }
}

impl ExportFormatter for ReportFormatter {
    fn format(&self, record: &AnalysisRecord) -> IntelliCodeResult<String> {
        Self::render(record).map_err(|e| IntelliCodeError::export_error("pdf", &e.to_string()))
    }

    fn file_name(&self, record: &AnalysisRecord) -> String {
        format!("analysis_report_{}.txt", record.id)
    }
}
