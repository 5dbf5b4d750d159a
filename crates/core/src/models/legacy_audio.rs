//! Legacy audio model (the Study).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::categories::{
    default_audio_category, validate_audio_category, validate_audio_category_update,
};
use crate::listing::{Dated, Searchable};
use crate::patch::{non_empty_text, Patch};
use crate::types::{DbId, Identified, Timestamp};

/// A row from the `legacy_audio` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct LegacyAudio {
    pub id: DbId,
    pub title: String,
    pub audio_url: Option<String>,
    pub duration: Option<String>,
    pub category: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a legacy audio record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLegacyAudio {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub audio_url: Option<String>,
    pub duration: Option<String>,
    #[serde(default = "default_audio_category")]
    #[validate(custom(function = "validate_audio_category"))]
    pub category: String,
    pub description: Option<String>,
}

impl CreateLegacyAudio {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            audio_url: None,
            duration: None,
            category: default_audio_category(),
            description: None,
        }
    }
}

/// DTO for a partial legacy audio update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateLegacyAudio {
    #[serde(skip_serializing_if = "Patch::is_missing")]
    #[validate(custom(function = "non_empty_text"))]
    pub title: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub audio_url: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub duration: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    #[validate(custom(function = "validate_audio_category_update"))]
    pub category: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub description: Patch<String>,
}

impl Identified for LegacyAudio {
    fn id(&self) -> DbId {
        self.id
    }
}

impl Searchable for LegacyAudio {
    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Dated for LegacyAudio {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
