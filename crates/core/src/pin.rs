//! Shared delete PIN.
//!
//! A single secret authorizes deletes for every archive. It is supplied by
//! configuration at startup and compared against the `x-pin` request header.
//! There is no per-user credential and no hashing.

use std::fmt;

/// Name of the request header carrying the PIN.
pub const PIN_HEADER: &str = "x-pin";

/// How a supplied PIN is compared against the configured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMatch {
    /// Byte-for-byte equality.
    Exact,
    /// Equality ignoring ASCII case.
    IgnoreAsciiCase,
}

impl PinMatch {
    pub fn matches(self, expected: &str, supplied: &str) -> bool {
        match self {
            PinMatch::Exact => supplied == expected,
            PinMatch::IgnoreAsciiCase => supplied.eq_ignore_ascii_case(expected),
        }
    }
}

/// The configured delete PIN. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedPin(String);

impl SharedPin {
    /// Returns `None` for an empty or all-whitespace secret.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Check a supplied PIN. A missing header never matches.
    pub fn verify(&self, supplied: Option<&str>, mode: PinMatch) -> bool {
        supplied.is_some_and(|pin| mode.matches(&self.0, pin))
    }
}

impl fmt::Debug for SharedPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedPin(****)")
    }
}
