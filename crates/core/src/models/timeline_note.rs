//! Timeline note model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::listing::Yearly;
use crate::patch::{non_empty_text, not_null, Patch};
use crate::types::{DbId, Identified, Timestamp};

/// A row from the `timeline_notes` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct TimelineNote {
    pub id: DbId,
    pub year: i32,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a timeline note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimelineNote {
    pub year: i32,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
    pub image_url: Option<String>,
}

/// DTO for a partial timeline note update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTimelineNote {
    #[serde(skip_serializing_if = "Patch::is_missing")]
    #[validate(custom(function = "not_null"))]
    pub year: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    #[validate(custom(function = "non_empty_text"))]
    pub content: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub image_url: Patch<String>,
}

impl Identified for TimelineNote {
    fn id(&self) -> DbId {
        self.id
    }
}

impl Yearly for TimelineNote {
    fn year(&self) -> i32 {
        self.year
    }
}
