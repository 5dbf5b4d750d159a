//! Client-side failures.
//!
//! Every failed call yields a [`ClientError`] that keeps the underlying cause
//! for logs and exposes a fixed [`ClientError::user_message`] that does not
//! depend on what went wrong.

use std::fmt;

use crate::resource::Collection;

/// What the caller was trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Load => "load",
            Operation::Add => "add",
            Operation::Update => "update",
            Operation::Delete => "delete",
        })
    }
}

/// Why a call failed.
#[derive(Debug, thiserror::Error)]
pub enum Cause {
    /// The HTTP request itself failed (connect, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body, usually `{"error": ..., "code": ...}`.
        body: String,
    },

    /// The local PIN gate refused the delete; nothing was sent.
    #[error("PIN did not match")]
    PinRejected,
}

#[derive(Debug, thiserror::Error)]
#[error("{operation} {collection} failed: {cause}")]
pub struct ClientError {
    pub operation: Operation,
    pub collection: Collection,
    #[source]
    pub cause: Cause,
}

impl ClientError {
    pub fn new(operation: Operation, collection: Collection, cause: Cause) -> Self {
        Self {
            operation,
            collection,
            cause,
        }
    }

    /// Fixed text for the operation, e.g. `"Failed to add recipe"`.
    pub fn user_message(&self) -> String {
        match self.operation {
            Operation::Load => format!("Failed to load {}", self.collection.plural()),
            op => format!("Failed to {op} {}", self.collection.noun()),
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match &self.cause {
            Cause::Api { status, .. } => Some(*status),
            Cause::Request(err) => err.status().map(|s| s.as_u16()),
            Cause::PinRejected => None,
        }
    }
}
