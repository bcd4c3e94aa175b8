//! Error types for the runtime model.

use sumgen_core::ModelError;
use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Failures of the non-`try` operations. Each corresponds to an
/// `ArgumentException` thrown by the generated code.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// A lookup was given no value, or a value of another union.
    #[error("Value is not a defined {union} variant: {value}")]
    NoMatchingVariant { union: String, value: String },

    /// Parsing found no variant with the requested name.
    #[error("Requested value '{input}' was not found in {union}.")]
    UnknownVariant { union: String, input: String },

    /// A companion enum value with no member.
    #[error("Value is not a defined {companion} member: {value}")]
    UndefinedEnumValue { companion: String, value: i128 },

    #[error("{variant} takes {expected} values, got {actual}")]
    ArityMismatch {
        variant: String,
        expected: usize,
        actual: usize,
    },

    #[error("Value {position} of {variant} must be a {expected}")]
    TypeMismatch {
        variant: String,
        position: usize,
        expected: String,
    },

    /// The schema itself is unusable.
    #[error("Invalid schema: {0}")]
    Model(#[from] ModelError),
}

/// A formatting destination was too small.
///
/// `written` counts the bytes of the chunks completed before the one that
/// did not fit; those bytes are valid in the destination.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Destination too small after {written} bytes")]
pub struct Truncated {
    pub written: usize,
}
