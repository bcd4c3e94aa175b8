//! Core types, schema model, and validation for tagged-union synthesis.
//!
//! This crate provides the foundational types used by the other sumgen crates:
//! - Raw schema candidates as delivered by the host
//! - The validated `SchemaModel` and its `MemberModel`s
//! - Validation rules and the diagnostics they produce
//! - Numeric literal evaluation for discriminants
//! - The chunked text layout shared by emitted code and the runtime
//! - Error types

pub mod diagnostics;
pub mod errors;
pub mod layout;
pub mod literal;
pub mod member;
pub mod schema;
pub mod types;
pub mod validate;

pub use diagnostics::*;
pub use errors::*;
pub use literal::NumericLiteral;
pub use member::MemberModelBuilder;
pub use schema::*;
pub use types::*;
pub use validate::{SchemaValidator, SkipReason, Validation, DEFAULT_MARKER_SUFFIX};
