use crate::config::constants::{HISTORY_CAPACITY, ISSUES_FIXED_RATIO};
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::dashboard_stats::DashboardStats;

pub struct HistoryManager;

impl HistoryManager {

    /// Newest first; anything past the capacity is dropped from the old end.
    pub fn append_to_history(mut history: Vec<AnalysisRecord>, record: AnalysisRecord) -> Vec<AnalysisRecord> {
        history.insert(0, record);
        history.truncate(HISTORY_CAPACITY);
        history
    }

    pub fn compute_dashboard(history: &[AnalysisRecord]) -> DashboardStats {
        let count = history.len();
        let total_issues: usize = history.iter().map(|record| record.issues.len()).sum();

        let avg_quality_score = if count == 0 {
            None
        } else {
            let sum: u64 = history.iter().map(|record| u64::from(record.quality_score)).sum();
            Some((sum as f64 / count as f64).round() as u32)
        };

        DashboardStats {
            count,
            total_issues,
            issues_fixed: (total_issues as f64 * ISSUES_FIXED_RATIO).floor() as usize,
            avg_quality_score,
        }
    }

    pub fn recent(history: &[AnalysisRecord], limit: usize) -> &[AnalysisRecord] {
        &history[..history.len().min(limit)]
    }

    pub fn find(history: &[AnalysisRecord], id: u64) -> Option<&AnalysisRecord> {
        history.iter().find(|record| record.id == id)
    }

    /// Applied to loaded history so a hand-edited store cannot break the capacity bound.
    pub fn enforce_capacity(mut history: Vec<AnalysisRecord>) -> Vec<AnalysisRecord> {
        if history.len() > HISTORY_CAPACITY {
            log::warn!("⚠️ Stored history has {} entries, keeping the newest {}", history.len(), HISTORY_CAPACITY);
            history.truncate(HISTORY_CAPACITY);
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::enums::issue_kind::IssueKind;
    use crate::enums::issue_severity::IssueSeverity;
    use crate::enums::language::Language;
    use crate::structs::issue::Issue;

    fn record(id: u64, quality_score: u32, issue_count: usize) -> AnalysisRecord {
        AnalysisRecord {
            id,
            timestamp: Utc::now(),
            language: Language::Go,
            source_text: "package main".to_string(),
            quality_score,
            security_score: 80,
            issues: (0..issue_count)
                .map(|_| Issue {
                    kind: IssueKind::Quality,
                    severity: IssueSeverity::Low,
                    line: 1,
                    message: "m".to_string(),
                    remediation: "r".to_string(),
                })
                .collect(),
            suggestions: vec![],
            performance_tips: vec![],
            lines_of_code: 1,
        }
    }

    #[test]
    fn test_append_puts_newest_first_and_evicts_oldest() {
        let mut history = Vec::new();
        for id in 1..=60 {
            history = HistoryManager::append_to_history(history, record(id, 80, 0));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.first().map(|r| r.id), Some(60));
        assert_eq!(history.last().map(|r| r.id), Some(11));
        assert!(history.windows(2).all(|pair| pair[0].id > pair[1].id));
    }

    #[test]
    fn test_empty_dashboard_has_no_average() {
        let stats = HistoryManager::compute_dashboard(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total_issues, 0);
        assert_eq!(stats.avg_quality_score, None);
        assert_eq!(stats.avg_score_label(), "--");
    }

    #[test]
    fn test_dashboard_aggregates() {
        let history = vec![record(2, 90, 3), record(1, 80, 1)];
        let stats = HistoryManager::compute_dashboard(&history);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_issues, 4);
        assert_eq!(stats.issues_fixed, 2);
        assert_eq!(stats.avg_quality_score, Some(85));
    }

    #[test]
    fn test_average_rounds_half_up() {
        let history = vec![record(2, 80, 0), record(1, 81, 0)];
        assert_eq!(HistoryManager::compute_dashboard(&history).avg_quality_score, Some(81));
    }

    #[test]
    fn test_recent_and_find() {
        let history: Vec<_> = (1..=12).rev().map(|id| record(id, 75, 0)).collect();
        assert_eq!(HistoryManager::recent(&history, 10).len(), 10);
        assert_eq!(HistoryManager::recent(&history[..3], 10).len(), 3);
        assert_eq!(HistoryManager::find(&history, 5).map(|r| r.id), Some(5));
        assert!(HistoryManager::find(&history, 99).is_none());
    }
}
