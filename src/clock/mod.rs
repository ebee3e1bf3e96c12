//! Zone resolution and clock formatting.
//!
//! The IANA database itself is owned by `chrono-tz`; this module is the thin
//! contract on top of it: "format an instant in a zone, fail if the zone is
//! unknown".

pub mod formatter;
pub mod reading;
pub mod validator;

use std::fmt;

pub use reading::ClockReading;
pub use validator::{is_valid, resolve};

/// Error types for clock operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// The identifier is not resolvable in the bundled IANA database.
    Unresolvable(String),
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneError::Unresolvable(tz) => write!(f, "unknown time zone '{}'", tz),
        }
    }
}

impl std::error::Error for ZoneError {}
