use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub count: usize,
    pub total_issues: usize,
    pub issues_fixed: usize,
    /// `None` when there is no history to average.
    pub avg_quality_score: Option<u32>,
}

impl DashboardStats {
    pub fn avg_score_label(&self) -> String {
        self.avg_quality_score
            .map_or_else(|| "--".to_string(), |score| score.to_string())
    }
}
