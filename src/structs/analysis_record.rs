use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::issue_kind::IssueKind;
use crate::enums::issue_severity::IssueSeverity;
use crate::enums::language::Language;
use crate::structs::issue::Issue;
use crate::structs::performance_tip::PerformanceTip;
use crate::structs::suggestion::Suggestion;

/// One completed (simulated) analysis of a code submission.
///
/// Field names on the wire follow the export/persistence JSON shape, so a
/// record read back from storage or from a JSON export compares equal to the
/// one that was written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub language: Language,
    #[serde(rename = "code")]
    pub source_text: String,
    pub quality_score: u32,
    pub security_score: u32,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub performance_tips: Vec<PerformanceTip>,
    pub lines_of_code: usize,
}

impl AnalysisRecord {
    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }

    pub fn high_severity_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.severity == IssueSeverity::High).count()
    }
}
