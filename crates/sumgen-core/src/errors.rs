//! Error types for schema modelling.

use thiserror::Error;

use crate::types::UnderlyingType;

/// Errors raised while building or evaluating a schema model.
///
/// These describe inputs that break the host contract (duplicate members,
/// unresolved types) or literals that cannot be evaluated. They are distinct
/// from [`crate::Diagnostic`]s, which are reported back to the schema author.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Schema identifier is empty")]
    EmptyIdentifier,

    #[error("Member name is empty in schema {schema}")]
    EmptyMemberName { schema: String },

    #[error("Duplicate member '{member}' in schema {schema}")]
    DuplicateMember { schema: String, member: String },

    #[error("Unresolved type '{text}' at position {position} of member {member}")]
    UnresolvedType {
        member: String,
        position: usize,
        text: String,
    },

    #[error("Unknown underlying type: {0}")]
    UnknownUnderlyingType(String),

    #[error("Invalid numeric literal '{literal}' on member {member}")]
    InvalidLiteral { member: String, literal: String },

    #[error("Value {value} of member {member} does not fit in {underlying}")]
    DiscriminantOutOfRange {
        member: String,
        value: i128,
        underlying: UnderlyingType,
    },
}
