use crate::enums::issue_kind::IssueKind;
use crate::enums::issue_severity::IssueSeverity;
use crate::helpers::format_helper::FormatHelper;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::dashboard_stats::DashboardStats;
use crate::structs::issue::Issue;
use crate::structs::settings::Settings;

pub struct AnalysisLogger;

impl AnalysisLogger {

    pub fn print_analysis_results(record: &AnalysisRecord, settings: &Settings) {
        log::info!("🔍 CODE ANALYSIS REPORT");
        log::info!("======================");
        log::info!("{} {} • {} lines", record.language.icon(), record.language, record.lines_of_code);
        log::info!("📊 Quality: {}/100 | 🔒 Security: {}/100", record.quality_score, record.security_score);

        let quality: Vec<&Issue> = record.issues_of(IssueKind::Quality).collect();
        let security: Vec<&Issue> = record.issues_of(IssueKind::Security).collect();
        Self::print_issues("🧹 QUALITY ISSUES", &quality, settings.show_line_numbers);
        Self::print_issues("🔒 SECURITY ISSUES", &security, settings.show_line_numbers);

        if settings.security_alerts && record.high_severity_count() > 0 {
            log::warn!("🚨 {} high severity issue(s) need attention", record.high_severity_count());
        }

        log::info!("\n🛠️ REFACTORING SUGGESTIONS");
        if record.suggestions.is_empty() {
            log::info!("  No refactoring suggestions at this time.");
        }
        for suggestion in &record.suggestions {
            log::info!("  • {}", suggestion.title);
            log::info!("      {}", suggestion.description);
            log::info!("      💡 {}", suggestion.example);
            log::info!("      Impact: {}", suggestion.impact);
        }

        log::info!("\n⚡ PERFORMANCE TIPS");
        if record.performance_tips.is_empty() {
            log::info!("  No performance optimizations suggested.");
        }
        for tip in &record.performance_tips {
            log::info!("  • {}", tip.title);
            log::info!("      {}", tip.description);
            log::info!("      Recommendation: {}", tip.recommendation);
            log::info!("      📈 Expected Impact: {}", tip.impact);
        }
    }

    fn print_issues(title: &str, issues: &[&Issue], show_line_numbers: bool) {
        log::info!("\n{}", title);
        if issues.is_empty() {
            log::info!("  No issues found! Great work! 🎉");
            return;
        }

        for issue in issues {
            let badge = match issue.severity {
                IssueSeverity::High => "⚠️ HIGH",
                IssueSeverity::Medium => "📋 MEDIUM",
                IssueSeverity::Low => "💡 LOW",
            };
            if show_line_numbers {
                log::info!("  {} [Line {}]: {}", badge, issue.line, issue.message);
            } else {
                log::info!("  {}: {}", badge, issue.message);
            }
            log::info!("      💡 {}", issue.remediation);
        }
    }

    pub fn print_history(records: &[AnalysisRecord]) {
        log::info!("\n📚 Recent Analyses:");
        if records.is_empty() {
            log::info!("  No analyses yet. Start by analyzing some code!");
            return;
        }

        for record in records {
            log::info!(
                "  #{} {} {} Analysis • {} • {} lines | Quality {} | Security {}",
                record.id,
                record.language.icon(),
                record.language,
                FormatHelper::short_date(&record.timestamp),
                record.lines_of_code,
                record.quality_score,
                record.security_score
            );
        }
    }

    pub fn print_dashboard(stats: &DashboardStats) {
        log::info!("\n📊 Dashboard");
        log::info!("═══════════════════════════════════════");
        log::info!("   Total Analyses: {}", stats.count);
        log::info!("   Issues Found: {}", stats.total_issues);
        log::info!("   Issues Fixed: {}", stats.issues_fixed);
        log::info!("   Average Score: {}", stats.avg_score_label());
        log::info!("═══════════════════════════════════════");
    }

    pub fn print_settings(settings: &Settings) {
        log::info!("\n⚙️ Settings");
        for (key, value) in settings.entries() {
            log::info!("   {:<20} {}", key, value);
        }
    }
}
