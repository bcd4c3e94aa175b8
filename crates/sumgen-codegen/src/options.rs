//! Generator configuration.

use serde::{Deserialize, Serialize};
use sumgen_core::DEFAULT_MARKER_SUFFIX;

use crate::error::{CodegenError, Result};

/// Options for a generation run.
///
/// Every field has a default, so a JSON document only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Identifier suffix that marks a schema.
    pub marker_suffix: String,
    /// Emit the companion enum. Turn off when the host already compiles
    /// the declared enum.
    pub emit_companion_enum: bool,
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Emit the marker attribute declarations once per run.
    pub emit_support_file: bool,
    /// Namespace of the marker attributes.
    pub support_namespace: String,
    /// Appended to the union name to form the output file name.
    pub file_suffix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            marker_suffix: DEFAULT_MARKER_SUFFIX.to_string(),
            emit_companion_enum: true,
            indent_width: 4,
            emit_support_file: true,
            support_namespace: "VariantEnum".to_string(),
            file_suffix: "_generated.g.cs".to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Parse options from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check option values that would produce unusable output.
    pub fn validate(&self) -> Result<()> {
        if self.marker_suffix.is_empty() {
            return Err(CodegenError::InvalidOptions(
                "marker_suffix must not be empty".to_string(),
            ));
        }
        if self.indent_width == 0 {
            return Err(CodegenError::InvalidOptions(
                "indent_width must be at least 1".to_string(),
            ));
        }
        if self.file_suffix.is_empty() {
            return Err(CodegenError::InvalidOptions(
                "file_suffix must not be empty".to_string(),
            ));
        }
        if self.emit_support_file && self.support_namespace.is_empty() {
            return Err(CodegenError::InvalidOptions(
                "support_namespace must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.marker_suffix, "Variant");
        assert!(options.emit_companion_enum);
        assert_eq!(options.indent_width, 4);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let options = GeneratorOptions::from_json(r#"{"indent_width": 2}"#).unwrap();
        assert_eq!(options.indent_width, 2);
        assert_eq!(options.file_suffix, "_generated.g.cs");
    }

    #[test]
    fn test_rejects_zero_indent() {
        let err = GeneratorOptions::from_json(r#"{"indent_width": 0}"#).unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOptions(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GeneratorOptions::from_json("{").unwrap_err();
        assert!(matches!(err, CodegenError::Json(_)));
    }
}
