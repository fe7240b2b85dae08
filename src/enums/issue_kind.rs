use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum IssueKind {
    #[serde(rename = "quality")]
    Quality,
    #[serde(rename = "security")]
    Security,
}
