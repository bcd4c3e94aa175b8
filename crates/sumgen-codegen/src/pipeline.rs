//! Batch generation: candidates in, files and diagnostics out.
//!
//! Each candidate is validated and emitted on its own. A candidate that fails
//! never affects the others; its error is recorded in the output and the run
//! carries on.

use serde::Serialize;
use sumgen_core::{
    Diagnostic, DiagnosticReporter, SchemaCandidate, SchemaValidator, SkipReason, Validation,
};
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{CodegenError, Result};
use crate::generators::{CSharpEmitter, CodeEmitter, GeneratedFile};
use crate::options::GeneratorOptions;

/// What happened to one candidate.
#[derive(Debug)]
pub enum SchemaOutcome {
    Generated(GeneratedFile),
    Skipped(SkipReason),
    Rejected(Diagnostic),
    /// The host handed over a malformed candidate, or emission failed.
    Failed(CodegenError),
}

/// A candidate that produced neither output nor a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSchema {
    pub identifier: String,
    pub reason: SkipReason,
}

/// A candidate that could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedSchema {
    pub identifier: String,
    pub message: String,
}

/// Everything a run produced, in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationOutput {
    pub files: Vec<GeneratedFile>,
    pub diagnostics: Vec<Diagnostic>,
    pub skipped: Vec<SkippedSchema>,
    pub failures: Vec<FailedSchema>,
}

impl GenerationOutput {
    /// Look up a generated file by hint name.
    pub fn file(&self, hint_name: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.hint_name == hint_name)
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty() || !self.failures.is_empty()
    }
}

/// Drives candidates through validation and emission.
pub struct Generator<E: CodeEmitter = CSharpEmitter> {
    validator: SchemaValidator,
    emitter: E,
}

impl Generator<CSharpEmitter> {
    /// A C# generator with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(GeneratorOptions::default())
    }

    pub fn with_options(options: GeneratorOptions) -> Result<Self> {
        let validator = SchemaValidator::with_marker(options.marker_suffix.clone());
        let emitter = CSharpEmitter::with_options(options)?;
        Ok(Self { validator, emitter })
    }
}

impl<E: CodeEmitter> Generator<E> {
    /// A generator for any target.
    pub fn with_emitter(validator: SchemaValidator, emitter: E) -> Self {
        Self { validator, emitter }
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Validate and emit one candidate.
    pub fn process(&self, candidate: &SchemaCandidate) -> SchemaOutcome {
        let validation = match self.validator.validate(candidate) {
            Ok(validation) => validation,
            Err(e) => return SchemaOutcome::Failed(e.into()),
        };

        match validation {
            Validation::Accepted(schema) => match self.emitter.emit_file(&schema) {
                Ok(file) => SchemaOutcome::Generated(file),
                Err(e) => SchemaOutcome::Failed(e),
            },
            Validation::Skipped(reason) => SchemaOutcome::Skipped(reason),
            Validation::Rejected(diagnostic) => SchemaOutcome::Rejected(diagnostic),
        }
    }

    /// Process a batch.
    ///
    /// Only a failure to emit the shared support file is an error; every
    /// per-candidate problem is reported in the output.
    pub fn run(&self, candidates: &[SchemaCandidate]) -> Result<GenerationOutput> {
        let outcomes = self.process_all(candidates);

        let mut output = GenerationOutput::default();
        let mut reporter = DiagnosticReporter::new();
        if let Some(support) = self.emitter.emit_support()? {
            output.files.push(support);
        }

        for (candidate, outcome) in candidates.iter().zip(outcomes) {
            let identifier = candidate.identifier.as_str();
            match outcome {
                SchemaOutcome::Generated(file) => {
                    debug!(schema = identifier, file = %file.hint_name, "generated");
                    output.files.push(file);
                }
                SchemaOutcome::Skipped(reason) => {
                    debug!(schema = identifier, ?reason, "skipped");
                    output.skipped.push(SkippedSchema {
                        identifier: identifier.to_string(),
                        reason,
                    });
                }
                SchemaOutcome::Rejected(diagnostic) => {
                    warn!(schema = identifier, %diagnostic, "rejected");
                    reporter.report(diagnostic);
                }
                SchemaOutcome::Failed(error) => {
                    warn!(schema = identifier, %error, "generation failed");
                    output.failures.push(FailedSchema {
                        identifier: identifier.to_string(),
                        message: error.to_string(),
                    });
                }
            }
        }
        output.diagnostics = reporter.into_diagnostics();

        info!(
            emitter = self.emitter.target_name(),
            candidates = candidates.len(),
            files = output.files.len(),
            diagnostics = output.diagnostics.len(),
            skipped = output.skipped.len(),
            failures = output.failures.len(),
            "generation finished"
        );
        Ok(output)
    }

    #[cfg(not(feature = "parallel"))]
    fn process_all(&self, candidates: &[SchemaCandidate]) -> Vec<SchemaOutcome> {
        candidates.iter().map(|c| self.process(c)).collect()
    }

    #[cfg(feature = "parallel")]
    fn process_all(&self, candidates: &[SchemaCandidate]) -> Vec<SchemaOutcome> {
        candidates.par_iter().map(|c| self.process(c)).collect()
    }
}

/// Parse a JSON array of schema candidates.
pub fn load_candidates(json: &str) -> Result<Vec<SchemaCandidate>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sumgen_core::{DiagnosticKind, ModelError, RawMember, Severity, TypeSlot};

    fn ip_addr() -> SchemaCandidate {
        SchemaCandidate::new("IpAddrVariant")
            .namespace("Net")
            .member(RawMember::with_types("V4", ["byte", "byte", "byte", "byte"]))
            .member(RawMember::with_types("V6", ["string"]))
    }

    #[test]
    fn test_process_generates_file() {
        let generator = Generator::new().unwrap();
        match generator.process(&ip_addr()) {
            SchemaOutcome::Generated(file) => {
                assert_eq!(file.hint_name, "IpAddr_generated.g.cs");
                assert!(file.content.contains("abstract partial record IpAddr"));
            }
            other => panic!("expected a file, got {:?}", other),
        }
    }

    #[test]
    fn test_run_isolates_failures() {
        let generator = Generator::new().unwrap();
        let candidates = vec![
            ip_addr(),
            SchemaCandidate::new("Plain"),
            SchemaCandidate::new("Variant"),
            SchemaCandidate::new("SkipVariant").ignored(),
            SchemaCandidate::new("InnerVariant").nested_in("Outer"),
            SchemaCandidate::new("BadVariant")
                .member(RawMember::unit("A"))
                .member(RawMember::unit("A")),
            SchemaCandidate::new("UnitVariant").member(RawMember::unit("Only")),
        ];

        let output = generator.run(&candidates).unwrap();

        let names: Vec<_> = output.files.iter().map(|f| f.hint_name.as_str()).collect();
        assert_eq!(
            names,
            ["VariantEnum.g.cs", "IpAddr_generated.g.cs", "Unit_generated.g.cs"]
        );

        let reasons: Vec<_> = output.skipped.iter().map(|s| s.reason).collect();
        assert_eq!(
            reasons,
            [SkipReason::NotMarked, SkipReason::Placeholder, SkipReason::Ignored]
        );

        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].severity(), Severity::Error);
        assert_eq!(
            output.diagnostics[0].kind,
            DiagnosticKind::NestedSchemaNotAllowed {
                schema_name: "InnerVariant".to_string()
            }
        );

        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].identifier, "BadVariant");
        assert!(output.has_errors());
    }

    #[test]
    fn test_diagnostics_keep_input_order() {
        let generator = Generator::new().unwrap();
        let candidates = vec![
            SchemaCandidate::new("FirstVariant").nested_in("Outer"),
            ip_addr(),
            SchemaCandidate::new("SecondVariant").nested_in("Outer"),
        ];

        let output = generator.run(&candidates).unwrap();
        let names: Vec<_> = output
            .diagnostics
            .iter()
            .map(|d| match &d.kind {
                DiagnosticKind::NestedSchemaNotAllowed { schema_name } => schema_name.as_str(),
            })
            .collect();
        assert_eq!(names, ["FirstVariant", "SecondVariant"]);
        assert_eq!(output.files.len(), 2);
    }

    #[test]
    fn test_unresolved_type_is_failure() {
        let generator = Generator::new().unwrap();
        let candidate = SchemaCandidate::new("BrokenVariant").member(RawMember::with_types(
            "A",
            [TypeSlot::Unresolved {
                unresolved: "Missing".to_string(),
            }],
        ));

        match generator.process(&candidate) {
            SchemaOutcome::Failed(CodegenError::Model(ModelError::UnresolvedType {
                member,
                position,
                ..
            })) => {
                assert_eq!(member, "A");
                assert_eq!(position, 0);
            }
            other => panic!("expected an unresolved type failure, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_marker() {
        let options = GeneratorOptions {
            marker_suffix: "Union".to_string(),
            emit_support_file: false,
            ..GeneratorOptions::default()
        };
        let generator = Generator::with_options(options).unwrap();
        let output = generator
            .run(&[SchemaCandidate::new("ShapeUnion").member(RawMember::unit("Empty"))])
            .unwrap();

        assert_eq!(output.files.len(), 1);
        assert_eq!(output.files[0].hint_name, "Shape_generated.g.cs");
        assert!(output.files[0].content.contains("public enum ShapeUnion : byte"));
    }

    #[test]
    fn test_empty_batch() {
        let generator = Generator::new().unwrap();
        let output = generator.run(&[]).unwrap();
        assert_eq!(output.files.len(), 1);
        assert!(!output.has_errors());
    }

    #[test]
    fn test_load_candidates() {
        let json = r#"[
            {
                "identifier": "IpAddrVariant",
                "members": [
                    { "name": "V4", "value_types": ["byte", "byte", "byte", "byte"] },
                    { "name": "V6", "value_types": ["string"] }
                ]
            },
            { "identifier": "InnerVariant", "nesting": { "kind": "nested", "parent": "Outer" } }
        ]"#;
        let candidates = load_candidates(json).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].members[0].value_types.as_ref().map(Vec::len), Some(4));
        assert!(candidates[1].nesting.is_nested());

        assert!(matches!(load_candidates("{}"), Err(CodegenError::Json(_))));
    }
}
