use crate::{CoreError, CoreResult, SprintDto, SprintStatus, parse_timestamp};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity name used in alert headers and error payloads
pub const SPRINT_ENTITY_NAME: &str = "sprint";

/// A sprint as persisted by the store.
///
/// `id` is `None` until the store assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: Option<i64>,

    pub name: String,
    pub goal: Option<String>,

    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,

    pub status: SprintStatus,
}

impl Sprint {
    pub fn new(name: String, goal: Option<String>) -> Self {
        Self {
            id: None,
            name,
            goal,
            start_date: None,
            end_date: None,
            status: SprintStatus::default(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl TryFrom<SprintDto> for Sprint {
    type Error = CoreError;

    #[track_caller]
    fn try_from(dto: SprintDto) -> CoreResult<Self> {
        Ok(Sprint {
            id: dto.id,
            name: dto.name,
            goal: dto.goal,
            start_date: dto
                .start_date
                .map(|ts| parse_timestamp(ts, "start_date"))
                .transpose()?,
            end_date: dto
                .end_date
                .map(|ts| parse_timestamp(ts, "end_date"))
                .transpose()?,
            status: match dto.status {
                Some(status) => SprintStatus::from_str(&status)?,
                None => SprintStatus::default(),
            },
        })
    }
}
