//! Cross-cutting error types for the Kisaan client.
//!
//! Transport errors live in `kisaan-api` and configuration errors in
//! `kisaan-config`. The binary converges all of them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Kisaan crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name a known value of a closed domain.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}
