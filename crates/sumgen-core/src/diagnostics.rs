//! Diagnostics reported back to schema authors.

use std::fmt;

use crate::types::Location;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
        }
    }
}

/// Static description of a diagnostic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub severity: Severity,
}

const CATEGORY: &str = "Sumgen";

pub const MUST_NOT_BE_NESTED_TYPE: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "SUMGEN001",
    title: "Variant enum type must not be nested type",
    category: CATEGORY,
    severity: Severity::Error,
};

/// The closed set of diagnostic kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DiagnosticKind {
    /// A schema was declared inside another type.
    NestedSchemaNotAllowed { schema_name: String },
}

impl DiagnosticKind {
    pub fn descriptor(&self) -> &'static DiagnosticDescriptor {
        match self {
            Self::NestedSchemaNotAllowed { .. } => &MUST_NOT_BE_NESTED_TYPE,
        }
    }
}

/// A diagnostic attached to one schema declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: Location,
}

impl Diagnostic {
    pub fn nested_schema(schema_name: impl Into<String>, location: Location) -> Self {
        Self {
            kind: DiagnosticKind::NestedSchemaNotAllowed {
                schema_name: schema_name.into(),
            },
            location,
        }
    }

    pub fn id(&self) -> &'static str {
        self.kind.descriptor().id
    }

    pub fn severity(&self) -> Severity {
        self.kind.descriptor().severity
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        match &self.kind {
            DiagnosticKind::NestedSchemaNotAllowed { schema_name } => {
                format!("{}: {}", self.kind.descriptor().title, schema_name)
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    /// Compiler-style rendering: `file(line,col): error SUMGEN001: message`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}: {}",
            self.location,
            self.severity(),
            self.id(),
            self.message()
        )
    }
}

/// Collects diagnostics over a generation run.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticReporter {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_schema_message() {
        let diagnostic = Diagnostic::nested_schema("ABVariant", Location::new("Enums.cs", 33, 5));
        assert_eq!(diagnostic.id(), "SUMGEN001");
        assert_eq!(diagnostic.kind.descriptor().category, "Sumgen");
        assert_eq!(diagnostic.severity(), Severity::Error);
        assert_eq!(
            diagnostic.message(),
            "Variant enum type must not be nested type: ABVariant"
        );
        assert_eq!(
            diagnostic.to_string(),
            "Enums.cs(33,5): error SUMGEN001: Variant enum type must not be nested type: ABVariant"
        );
    }

    #[test]
    fn test_reporter_collects() {
        let mut reporter = DiagnosticReporter::new();
        assert!(!reporter.has_errors());

        reporter.report(Diagnostic::nested_schema("AVariant", Location::default()));
        reporter.report(Diagnostic::nested_schema("BVariant", Location::default()));
        assert_eq!(reporter.len(), 2);
        assert!(reporter.has_errors());

        let names: Vec<_> = reporter
            .into_diagnostics()
            .into_iter()
            .map(|d| match d.kind {
                DiagnosticKind::NestedSchemaNotAllowed { schema_name } => schema_name,
            })
            .collect();
        assert_eq!(names, ["AVariant", "BVariant"]);
    }
}
