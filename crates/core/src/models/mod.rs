//! Record shapes for each table: the full row, the create payload, and the
//! partial update payload.
//!
//! Rows derive `sqlx::FromRow` only with the `sqlx` feature, so the HTTP
//! client can use these types without a database driver.

pub mod legacy_audio;
pub mod recipe;
pub mod timeline_note;
pub mod user;
