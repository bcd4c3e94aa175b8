//! Validation of raw schema candidates.
//!
//! Rules are applied in a fixed order: the marker suffix must be present, a
//! bare marker is an uncreated placeholder, ignored declarations are dropped
//! silently, and only then is nesting checked. A candidate that passes all
//! of them is turned into a [`SchemaModel`].

use crate::diagnostics::Diagnostic;
use crate::errors::ModelError;
use crate::member::MemberModelBuilder;
use crate::schema::{SchemaCandidate, SchemaModel};

/// Identifier suffix that marks an enum as a tagged-union schema.
pub const DEFAULT_MARKER_SUFFIX: &str = "Variant";

/// Why a candidate produced no output and no diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkipReason {
    /// Identifier does not end with the marker suffix.
    NotMarked,
    /// Identifier is exactly the marker suffix.
    Placeholder,
    /// Declaration is marked to be ignored.
    Ignored,
}

/// Result of validating one candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Accepted(SchemaModel),
    Skipped(SkipReason),
    Rejected(Diagnostic),
}

impl Validation {
    pub fn accepted(self) -> Option<SchemaModel> {
        match self {
            Self::Accepted(schema) => Some(schema),
            _ => None,
        }
    }
}

/// Applies naming, ignore, and nesting rules to schema candidates.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    marker_suffix: String,
    members: MemberModelBuilder,
}

impl SchemaValidator {
    pub fn new() -> Self {
        Self::with_marker(DEFAULT_MARKER_SUFFIX)
    }

    pub fn with_marker(marker_suffix: impl Into<String>) -> Self {
        Self {
            marker_suffix: marker_suffix.into(),
            members: MemberModelBuilder::new(),
        }
    }

    pub fn marker_suffix(&self) -> &str {
        &self.marker_suffix
    }

    /// Validate a candidate.
    ///
    /// `Err` means the host handed over something malformed (duplicate or
    /// empty names, unresolved types, discriminants outside the underlying
    /// type); the schema is skipped without a diagnostic.
    pub fn validate(&self, candidate: &SchemaCandidate) -> Result<Validation, ModelError> {
        let identifier = candidate.identifier.as_str();

        let Some(name) = identifier.strip_suffix(self.marker_suffix.as_str()) else {
            return Ok(Validation::Skipped(SkipReason::NotMarked));
        };
        if name.is_empty() {
            return Ok(Validation::Skipped(SkipReason::Placeholder));
        }
        if candidate.ignore {
            return Ok(Validation::Skipped(SkipReason::Ignored));
        }
        if candidate.nesting.is_nested() {
            return Ok(Validation::Rejected(Diagnostic::nested_schema(
                identifier,
                candidate.location.clone(),
            )));
        }

        let members = self.members.build_all(&candidate.members)?;

        let mut builder = SchemaModel::builder(name)
            .declared_as(identifier)
            .underlying(candidate.underlying_type.unwrap_or_default())
            .accessibility(candidate.accessibility)
            .location(candidate.location.clone())
            .members(members);
        if let Some(namespace) = &candidate.namespace {
            builder = builder.namespace(namespace.clone());
        }

        let schema = builder.build()?;
        // Literals that are constant expressions are left for the C# compiler.
        schema.check_discriminants()?;
        Ok(Validation::Accepted(schema))
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}
