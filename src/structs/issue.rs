use serde::{Deserialize, Serialize};
use crate::enums::issue_kind::IssueKind;
use crate::enums::issue_severity::IssueSeverity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub line: usize,
    pub message: String,
    #[serde(rename = "suggestion")]
    pub remediation: String,
}
