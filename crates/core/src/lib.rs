//! Domain vocabulary shared by the Kindred server and client.
//!
//! Holds the record shapes for every table, the id and timestamp aliases,
//! the domain error type, category sets, the field-level validation error
//! shape, partial-update fields, delete-PIN comparison, and the listing rules
//! the client applies to fetched collections. Nothing here talks to the
//! database or the network; the `sqlx` feature only adds `FromRow` derives.

pub mod categories;
pub mod error;
pub mod listing;
pub mod models;
pub mod patch;
pub mod pin;
pub mod types;
pub mod validation;
