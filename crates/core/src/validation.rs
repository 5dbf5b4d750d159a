//! Field-level validation errors.
//!
//! Record shapes derive [`validator::Validate`]; [`validate_record`] runs the
//! derived rules and flattens any failures into a sorted list of
//! [`FieldError`]s so the HTTP layer can return every offending field at once.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the field, or `body` when the payload itself is unreadable.
    pub field: String,
    /// Machine-readable rule name (`length`, `category`, `invalid_json`, ...).
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Run the derived rules on `value`, mapping failures to
/// [`CoreError::InvalidFields`].
pub fn validate_record<T: Validate>(value: &T) -> Result<(), CoreError> {
    value
        .validate()
        .map_err(|errors| CoreError::InvalidFields(field_errors(&errors)))
}

/// Flatten `validator` output into a list sorted by field, then rule code.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let message = match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("failed `{}` check", err.code),
                };
                FieldError::new(field.clone(), err.code.to_string(), message)
            })
        })
        .collect();

    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    out
}
