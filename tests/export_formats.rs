use intellicode::enums::export_format::ExportFormat;
use intellicode::services::code_analyzer::CodeAnalyzer;
use intellicode::services::export::Exporter;
use intellicode::structs::analysis_record::AnalysisRecord;
use intellicode::traits::random_source::ThreadRandom;

fn record(code: &str, language: &str) -> AnalysisRecord {
    CodeAnalyzer::create_record(code, language, &mut ThreadRandom).unwrap()
}

#[test]
fn json_export_parses_back_to_the_same_record() {
    let original = record("q = \"SELECT \" + x\nel.innerHTML = q, \"quoted\"", "javascript");
    let json = Exporter::render(&original, ExportFormat::Json).unwrap();
    let parsed: AnalysisRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn csv_export_has_fixed_schema_for_any_record() {
    let inputs = [
        ("x", "python"),
        ("a, b, \"c\"\nfor i++ append", "cobol"),
        ("SELECT 1 + 2\ninnerHTML", "cpp"),
    ];
    for (code, language) in inputs {
        let csv = Exporter::render(&record(code, language), ExportFormat::Csv).unwrap();
        let metrics: Vec<&str> = csv.lines().map(|line| line.split(',').next().unwrap_or_default()).collect();
        assert_eq!(
            metrics,
            vec!["Metric", "Language", "Quality Score", "Security Score", "Lines of Code", "Issues Found", "Timestamp"]
        );
    }
}

#[test]
fn report_has_one_bullet_per_entry() {
    let analysed = record("for x in y:\n    z.append(x)", "python");
    let report = Exporter::render(&analysed, ExportFormat::Report).unwrap();
    let bullets = analysed.issues.len() + analysed.suggestions.len() + analysed.performance_tips.len();
    assert_eq!(report.matches('•').count(), bullets);
    assert!(report.contains("SCORES\n------"));
}

#[test]
fn unknown_setting_value_exports_report() {
    assert_eq!(ExportFormat::from_setting("pdf"), ExportFormat::Report);
    assert_eq!(ExportFormat::from_setting("docx"), ExportFormat::Report);
    assert_eq!(ExportFormat::from_setting("CSV"), ExportFormat::Csv);
}
