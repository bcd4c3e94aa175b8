//! C# source generation for tagged-union schemas.
//!
//! This crate turns validated schemas into C# source: an abstract record per
//! union, a sealed record per variant, a companion enum, and the formatting,
//! parsing, and conversion members that go with them.
//!
//! # Features
//!
//! - `parallel` - Process candidate batches on the rayon thread pool
//!
//! # Example
//!
//! ```ignore
//! use sumgen_codegen::{load_candidates, Generator};
//!
//! let candidates = load_candidates(&json)?;
//! let output = Generator::new()?.run(&candidates)?;
//! for file in &output.files {
//!     println!("{}:\n{}", file.hint_name, file.content);
//! }
//! ```

pub mod error;
pub mod generators;
pub mod options;
pub mod pipeline;

pub use error::{CodegenError, Result};
pub use generators::{CSharpEmitter, CodeEmitter, CodeWriter, GeneratedFile, TemplateEngine};
pub use options::GeneratorOptions;
pub use pipeline::{
    load_candidates, FailedSchema, GenerationOutput, Generator, SchemaOutcome, SkippedSchema,
};
