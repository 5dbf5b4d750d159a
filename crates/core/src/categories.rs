//! Category defaults and the fixed label set for legacy audio.

use validator::ValidationError;

use crate::patch::{not_null, Patch};

/// Category stored on a recipe when the payload omits one.
pub const DEFAULT_RECIPE_CATEGORY: &str = "veg";

/// Category stored on a legacy audio record when the payload omits one.
pub const DEFAULT_AUDIO_CATEGORY: &str = "stories";

/// Every category a legacy audio record may carry.
pub const AUDIO_CATEGORIES: &[&str] = &["finance", "gardening", "stories"];

/// The client's "show everything" category selection.
pub const ALL_CATEGORIES: &str = "all";

pub fn default_recipe_category() -> String {
    DEFAULT_RECIPE_CATEGORY.to_string()
}

pub fn default_audio_category() -> String {
    DEFAULT_AUDIO_CATEGORY.to_string()
}

/// Custom `validator` rule: the value must be one of [`AUDIO_CATEGORIES`].
pub fn validate_audio_category(value: &str) -> Result<(), ValidationError> {
    if AUDIO_CATEGORIES.contains(&value) {
        return Ok(());
    }
    let mut err = ValidationError::new("category");
    err.message = Some(format!("must be one of: {}", AUDIO_CATEGORIES.join(", ")).into());
    Err(err)
}

/// Update form of [`validate_audio_category`]; `null` is rejected as well.
pub fn validate_audio_category_update(value: &Patch<String>) -> Result<(), ValidationError> {
    not_null(value)?;
    value.value().map_or(Ok(()), |category| validate_audio_category(category))
}
