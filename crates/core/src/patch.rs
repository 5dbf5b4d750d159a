//! Fields of a partial update.
//!
//! A JSON key can be missing, `null`, or carry a value, and an update has to
//! tell the three apart: missing keeps the stored value, `null` clears a
//! nullable column and is rejected for a required one.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::ValidationError;

/// One field of a partial update. Use with `#[serde(default)]` so a missing
/// key becomes [`Patch::Missing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    /// `true` for `null` as well as a value: the column should be written.
    pub fn is_provided(&self) -> bool {
        !self.is_missing()
    }

    /// The new value, if one was given.
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(value) => Some(value),
            Patch::Missing | Patch::Null => None,
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Value(value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Patch::Null, Patch::Value))
    }
}

/// Missing and `null` both serialize as `null`; skip missing fields with
/// `skip_serializing_if = "Patch::is_missing"`.
impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Value(value) => serializer.serialize_some(value),
            Patch::Missing | Patch::Null => serializer.serialize_none(),
        }
    }
}

// ---------------------------------------------------------------------------
// validator rules
// ---------------------------------------------------------------------------

fn null_error() -> ValidationError {
    ValidationError::new("not_null").with_message(Cow::Borrowed("must not be null"))
}

/// Custom `validator` rule for required columns: `null` is rejected.
pub fn not_null<T>(value: &Patch<T>) -> Result<(), ValidationError> {
    match value {
        Patch::Null => Err(null_error()),
        Patch::Missing | Patch::Value(_) => Ok(()),
    }
}

/// Custom `validator` rule for required text: neither `null` nor empty.
pub fn non_empty_text(value: &Patch<String>) -> Result<(), ValidationError> {
    match value {
        Patch::Null => Err(null_error()),
        Patch::Value(text) if text.is_empty() => {
            Err(ValidationError::new("length").with_message(Cow::Borrowed("must not be empty")))
        }
        Patch::Missing | Patch::Value(_) => Ok(()),
    }
}
