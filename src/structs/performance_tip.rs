use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PerformanceTip {
    pub title: String,
    pub description: String,
    pub recommendation: String,
    pub impact: String,
}
