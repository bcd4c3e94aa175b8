//! C# code generator.
//!
//! Each schema becomes an abstract partial record with one sealed nested
//! record per variant, plus a companion enum carrying the numeric values.
//! The output targets C# 10 (file-scoped namespaces, `ISpanFormattable`).

mod companion;
mod convert;
mod format;
mod introspect;
mod parse;
mod prelude;
mod variants;

use sumgen_core::SchemaModel;
use tracing::debug;

use super::{CodeEmitter, CodeWriter, GeneratedFile, TemplateEngine};
use crate::error::Result;
use crate::options::GeneratorOptions;

/// Name of the support file holding the marker attributes.
pub const SUPPORT_FILE_NAME: &str = "VariantEnum.g.cs";

/// C# code emitter.
pub struct CSharpEmitter {
    engine: TemplateEngine<'static>,
    options: GeneratorOptions,
    generated_code: String,
}

impl CSharpEmitter {
    /// Create an emitter with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(GeneratorOptions::default())
    }

    pub fn with_options(options: GeneratorOptions) -> Result<Self> {
        options.validate()?;

        let mut engine = TemplateEngine::new();
        prelude::register(&mut engine)?;
        let generated_code = prelude::generated_code_attribute(&engine)?;

        Ok(Self {
            engine,
            options,
            generated_code,
        })
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    fn emit_members(&self, schema: &SchemaModel, w: &mut CodeWriter) {
        variants::emit_base_constructor(schema, w);
        w.blank();
        introspect::emit_count(schema, w);

        for member in schema.members() {
            w.blank();
            variants::emit_variant(schema, member, w);
        }

        let sections: [fn(&SchemaModel, &mut CodeWriter); 11] = [
            format::emit_format_support,
            introspect::emit_get_name,
            introspect::emit_get_names,
            introspect::emit_get_numeric_value,
            introspect::emit_is_defined,
            convert::emit_convert_enum,
            convert::emit_try_convert_enum,
            convert::emit_from_enum,
            convert::emit_try_from_enum,
            parse::emit_parse,
            parse::emit_try_parse,
        ];
        for section in sections {
            w.blank();
            section(schema, w);
        }
    }
}

impl CodeEmitter for CSharpEmitter {
    fn target_name(&self) -> &'static str {
        "csharp"
    }

    fn file_name(&self, schema: &SchemaModel) -> String {
        format!("{}{}", schema.name, self.options.file_suffix)
    }

    fn emit_schema(&self, schema: &SchemaModel) -> Result<String> {
        debug!(schema = %schema.name, members = schema.count(), "emitting C# union");

        let mut w = CodeWriter::new(self.options.indent_width);
        prelude::emit_prelude(&self.engine, schema, &mut w)?;

        if let Some(namespace) = &schema.namespace {
            w.blank();
            w.line(format!("namespace {};", namespace));
        }

        if self.options.emit_companion_enum {
            w.blank();
            w.line(&self.generated_code);
            companion::emit_companion_enum(schema, &mut w);
        }

        w.blank();
        w.line(&self.generated_code);
        w.line(format!(
            "{} abstract partial record {} : ISpanFormattable",
            schema.accessibility.keyword(),
            schema.name
        ));
        w.open();
        self.emit_members(schema, &mut w);
        w.close();

        Ok(w.finish())
    }

    fn emit_support(&self) -> Result<Option<GeneratedFile>> {
        if !self.options.emit_support_file {
            return Ok(None);
        }

        let content = prelude::render_support(
            &self.engine,
            &self.options.support_namespace,
            &self.generated_code,
        )?;
        Ok(Some(GeneratedFile {
            hint_name: SUPPORT_FILE_NAME.to_string(),
            content,
        }))
    }
}

/// The companion enum's type name, which is the identifier the schema was
/// declared under.
pub(crate) fn companion_name(schema: &SchemaModel) -> &str {
    &schema.declared_identifier
}

/// Arm body for lookups given a value outside the union.
pub(crate) fn undefined_value_throw(schema: &SchemaModel) -> String {
    format!(
        "throw new ArgumentException($\"Value is not a defined {} variant: {{value}}\", nameof(value))",
        schema.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sumgen_core::{Accessibility, MemberModel};

    fn ip_addr() -> SchemaModel {
        SchemaModel::builder("IpAddr")
            .namespace("Net")
            .member(MemberModel::with_types("V4", ["byte", "byte", "byte", "byte"]))
            .member(MemberModel::with_types("V6", ["string"]))
            .build()
            .unwrap()
    }

    #[test]
    fn test_file_name() {
        let emitter = CSharpEmitter::new().unwrap();
        assert_eq!(emitter.file_name(&ip_addr()), "IpAddr_generated.g.cs");
        assert_eq!(emitter.target_name(), "csharp");
    }

    #[test]
    fn test_emit_schema_layout() {
        let emitter = CSharpEmitter::new().unwrap();
        let code = emitter.emit_schema(&ip_addr()).unwrap();

        assert!(code.starts_with("// <auto-generated/>\n"));
        assert!(code.contains("\nnamespace Net;\n"));
        assert!(code.contains("public enum IpAddrVariant : byte\n{\n    V4,\n    V6,\n}\n"));
        assert!(code.contains("public abstract partial record IpAddr : ISpanFormattable\n{\n    private IpAddr()\n"));
        assert!(code.contains("    public const int Count = 2;\n"));
        assert!(code.contains(
            "    public sealed partial record V4(byte args0, byte args1, byte args2, byte args3) : IpAddr\n"
        ));
        assert!(code.contains("        public static readonly V6 Default = new(default!);\n"));
        assert!(code.ends_with("    }\n}\n"));

        let enum_at = code.find("public enum").unwrap();
        let record_at = code.find("abstract partial record").unwrap();
        let get_name_at = code.find("GetName(").unwrap();
        let try_parse_at = code.find("TryParse(").unwrap();
        assert!(enum_at < record_at);
        assert!(get_name_at < try_parse_at);
    }

    #[test]
    fn test_generated_code_precedes_types() {
        let emitter = CSharpEmitter::new().unwrap();
        let code = emitter.emit_schema(&ip_addr()).unwrap();
        let attribute = format!(
            "[global::System.CodeDom.Compiler.GeneratedCode(\"sumgen\", \"{}\")]\n",
            env!("CARGO_PKG_VERSION")
        );
        assert!(code.contains(&format!("{}public enum IpAddrVariant", attribute)));
        assert!(code.contains(&format!("{}public abstract partial record IpAddr", attribute)));
    }

    #[test]
    fn test_without_companion_or_namespace() {
        let options = GeneratorOptions {
            emit_companion_enum: false,
            ..GeneratorOptions::default()
        };
        let emitter = CSharpEmitter::with_options(options).unwrap();
        let schema = SchemaModel::builder("Shape")
            .accessibility(Accessibility::Internal)
            .member(MemberModel::unit("Empty"))
            .build()
            .unwrap();
        let code = emitter.emit_schema(&schema).unwrap();

        assert!(!code.contains("namespace "));
        assert!(!code.contains(" enum ShapeVariant"));
        assert!(code.contains("internal abstract partial record Shape : ISpanFormattable"));
        // Conversions still refer to the companion by name.
        assert!(code.contains("public static ShapeVariant ConvertEnum(Shape? value)"));
    }

    #[test]
    fn test_indent_width_option() {
        let options = GeneratorOptions {
            indent_width: 2,
            ..GeneratorOptions::default()
        };
        let emitter = CSharpEmitter::with_options(options).unwrap();
        let code = emitter.emit_schema(&ip_addr()).unwrap();
        assert!(code.contains("\n  public const int Count = 2;\n"));
    }

    #[test]
    fn test_support_file() {
        let emitter = CSharpEmitter::new().unwrap();
        let file = emitter.emit_support().unwrap().unwrap();
        assert_eq!(file.hint_name, SUPPORT_FILE_NAME);
        assert!(file.content.contains("namespace VariantEnum;"));

        let options = GeneratorOptions {
            emit_support_file: false,
            ..GeneratorOptions::default()
        };
        let emitter = CSharpEmitter::with_options(options).unwrap();
        assert!(emitter.emit_support().unwrap().is_none());
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = GeneratorOptions {
            marker_suffix: String::new(),
            ..GeneratorOptions::default()
        };
        assert!(CSharpEmitter::with_options(options).is_err());
    }
}
