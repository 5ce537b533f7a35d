//! # Error Types
//!
//! Structured error types for kabel_core. Each variant carries enough
//! context to understand and fix the problem programmatically, and every
//! error serializes cleanly to JSON for non-Rust consumers.
//!
//! ## Example
//!
//! ```rust
//! use kabel_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_m: f64) -> CalcResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "length_m",
//!             length_m.to_string(),
//!             "Cable length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for kabel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sizing operations.
///
/// Degraded selections (no cable meets every requirement) are *not* errors;
/// they are returned as flagged results so the caller can warn the user.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The ampacity table has no entries for the requested
    /// (material, installation method) pair
    #[error("No cable data for {material} with installation method {method}")]
    NoCableAvailable { material: String, method: String },

    /// A reference table violates its structural invariant
    /// (caught at load time, not during selection)
    #[error("Invalid reference table '{table}': {reason}")]
    InvalidTable { table: String, reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NoCableAvailable error
    pub fn no_cable_available(material: impl Into<String>, method: impl Into<String>) -> Self {
        CalcError::NoCableAvailable {
            material: material.into(),
            method: method.into(),
        }
    }

    /// Create an InvalidTable error
    pub fn invalid_table(table: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidTable {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::NoCableAvailable { .. } => "NO_CABLE_AVAILABLE",
            CalcError::InvalidTable { .. } => "INVALID_TABLE",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
