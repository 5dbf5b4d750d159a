//! Request extractors shared by the archive handlers.

use std::convert::Infallible;

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::Json;
use kindred_core::error::CoreError;
use kindred_core::pin::PIN_HEADER;
use kindred_core::validation::{validate_record, FieldError};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized (defaults applied) and run through
/// its `validator` rules.
///
/// An unreadable body and a rule failure both reject with
/// [`CoreError::InvalidFields`], so clients always get a field list on 400.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                CoreError::InvalidFields(vec![FieldError::new(
                    "body",
                    "invalid_json",
                    rejection.body_text(),
                )])
            })?;

        validate_record(&value)?;
        Ok(Self(value))
    }
}

/// The raw `x-pin` header, if present and valid UTF-8.
///
/// Never rejects: a missing PIN is a failed comparison, which the handler
/// reports as 403.
#[derive(Debug, Clone)]
pub struct PinHeader(pub Option<String>);

impl<S> FromRequestParts<S> for PinHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pin = parts
            .headers
            .get(PIN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        Ok(Self(pin))
    }
}
