//! Recipe model (the Hearth).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::categories::default_recipe_category;
use crate::listing::{Dated, Searchable};
use crate::patch::{non_empty_text, not_null, Patch};
use crate::types::{DbId, Identified, Timestamp};

/// A row from the `recipes` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: DbId,
    pub title: String,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub category: String,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a recipe. Defaults are filled in while deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipe {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default = "default_recipe_category")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
}

impl CreateRecipe {
    /// A recipe with only a title and every other field defaulted.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            video_url: None,
            thumbnail_url: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            category: default_recipe_category(),
            cook_time: None,
            servings: None,
        }
    }
}

/// DTO for a partial recipe update.
///
/// Missing keys are left untouched. `null` clears the optional text fields
/// and is rejected for the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateRecipe {
    #[serde(skip_serializing_if = "Patch::is_missing")]
    #[validate(custom(function = "non_empty_text"))]
    pub title: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub video_url: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub thumbnail_url: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    #[validate(custom(function = "not_null"))]
    pub ingredients: Patch<Vec<String>>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    #[validate(custom(function = "not_null"))]
    pub instructions: Patch<Vec<String>>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    #[validate(custom(function = "non_empty_text"))]
    pub category: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub cook_time: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub servings: Patch<String>,
}

impl Identified for Recipe {
    fn id(&self) -> DbId {
        self.id
    }
}

impl Searchable for Recipe {
    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Dated for Recipe {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
