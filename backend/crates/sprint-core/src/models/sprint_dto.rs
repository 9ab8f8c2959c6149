use crate::Sprint;

use serde::{Deserialize, Serialize};

/// Sprint wire format. Timestamps are unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,

    #[serde(default)]
    pub goal: Option<String>,

    #[serde(default)]
    pub start_date: Option<i64>,

    #[serde(default)]
    pub end_date: Option<i64>,

    /// "planned", "active", "completed" or "cancelled"; defaults to planned
    #[serde(default)]
    pub status: Option<String>,
}

impl From<Sprint> for SprintDto {
    fn from(s: Sprint) -> Self {
        Self {
            id: s.id,
            name: s.name,
            goal: s.goal,
            start_date: s.start_date.map(|dt| dt.timestamp()),
            end_date: s.end_date.map(|dt| dt.timestamp()),
            status: Some(s.status.as_str().to_string()),
        }
    }
}
