//! Code generators for target languages.

mod csharp;
mod templates;
mod writer;

pub use csharp::{CSharpEmitter, SUPPORT_FILE_NAME};
pub use templates::{csharp_string, TemplateEngine};
pub use writer::CodeWriter;

use serde::Serialize;
use sumgen_core::SchemaModel;

use crate::error::Result;

/// Common trait for code emitters.
///
/// Emitters are shared across worker threads when a batch is processed in
/// parallel.
pub trait CodeEmitter: Send + Sync {
    /// Target language name.
    fn target_name(&self) -> &'static str;

    /// Output file name for a schema.
    fn file_name(&self, schema: &SchemaModel) -> String;

    /// Generate the complete source for one schema.
    fn emit_schema(&self, schema: &SchemaModel) -> Result<String>;

    /// Generate source shared by every schema of a run, if the target needs any.
    fn emit_support(&self) -> Result<Option<GeneratedFile>>;

    /// Generate one schema as a file.
    fn emit_file(&self, schema: &SchemaModel) -> Result<GeneratedFile> {
        Ok(GeneratedFile {
            hint_name: self.file_name(schema),
            content: self.emit_schema(schema)?,
        })
    }
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// File name hint for the host build.
    pub hint_name: String,
    /// File content.
    pub content: String,
}
