//! Typed client for the Kindred archive API.
//!
//! Mirrors what the web front end does with the HTTP surface: reads each
//! collection through a cache that is dropped after any successful write,
//! filters and orders rows for display, and turns every failure into a
//! fixed message suitable for a toast.

pub mod api;
pub mod cache;
pub mod error;
pub mod pin_gate;
pub mod resource;

pub use api::KindredClient;
pub use error::{Cause, ClientError, Operation};
pub use pin_gate::PinGate;
pub use resource::{Collection, Resource};
