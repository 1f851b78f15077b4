//! Lecture model

use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;
use crate::utils::errors::{AttendanceError, Result};
use crate::utils::helpers::non_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date_time: NaiveDateTime,
}

impl Lecture {
    /// Whether the lecture is scheduled strictly after `now`
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.date_time > now
    }
}

/// Create/update payload for a lecture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureForm {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date_time: NaiveDateTime,
}

impl LectureForm {
    pub fn new(title: impl Into<String>, description: Option<String>, date_time: NaiveDateTime) -> Self {
        Self {
            title: title.into().trim().to_string(),
            description: non_blank(description),
            date_time,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AttendanceError::InvalidInput("Title is required".to_string()));
        }
        Ok(())
    }
}
