//! `TryFormat` and `ToString`.
//!
//! Each variant writes its layout chunk by chunk. A chunk is only written
//! after checking it fits, so on failure `charsWritten` counts exactly the
//! chunks already in the buffer and callers can retry with a larger one.

use sumgen_core::layout::{self, Chunk};
use sumgen_core::{arg_name, MemberModel, SchemaModel};

use crate::generators::{csharp_string, CodeWriter};

const TRY_FORMAT_SIGNATURE: &str = "bool TryFormat(Span<char> destination, out int charsWritten, ReadOnlySpan<char> format, IFormatProvider? provider)";

/// The per-variant override, one call per layout chunk joined with `&&`.
pub fn emit_try_format(member: &MemberModel, w: &mut CodeWriter) {
    let calls: Vec<String> = layout::chunks(member)
        .into_iter()
        .map(|chunk| match chunk {
            Chunk::Literal(text) => format!(
                "TryWriteLiteral(destination, ref charsWritten, {})",
                csharp_string(text)
            ),
            Chunk::Value { label, index } => format!(
                "TryWriteMember(destination, ref charsWritten, {}, {}, format, provider)",
                csharp_string(&label),
                arg_name(index)
            ),
        })
        .collect();

    w.line(format!("public override {}", TRY_FORMAT_SIGNATURE));
    w.open();
    w.line("charsWritten = 0;");
    let last = calls.len() - 1;
    for (i, call) in calls.iter().enumerate() {
        let lead = if i == 0 { "return " } else { "    && " };
        let end = if i == last { ";" } else { "" };
        w.line(format!("{}{}{}", lead, call, end));
    }
    w.close();
}

/// Members on the base record: the abstract `TryFormat`, both `ToString`
/// overloads, and the chunk writers used by the variants.
pub fn emit_format_support(_schema: &SchemaModel, w: &mut CodeWriter) {
    w.line(format!("public abstract {};", TRY_FORMAT_SIGNATURE));
    w.blank();

    w.line("public sealed override string ToString() => ToString(null, null);");
    w.blank();

    w.line("public string ToString(string? format, IFormatProvider? formatProvider)");
    w.open();
    w.line("var size = 64;");
    w.line("while (true)");
    w.open();
    w.line("var buffer = new char[size];");
    w.line("if (TryFormat(buffer, out var charsWritten, format, formatProvider))");
    w.open();
    w.line("return new string(buffer, 0, charsWritten);");
    w.close();
    w.blank();
    w.line("size *= 2;");
    w.close();
    w.close();
    w.blank();

    w.line("private static bool TryWriteLiteral(Span<char> destination, ref int charsWritten, string literal)");
    w.open();
    w.line("if (destination.Length - charsWritten < literal.Length)");
    w.open();
    w.line("return false;");
    w.close();
    w.blank();
    w.line("literal.AsSpan().CopyTo(destination.Slice(charsWritten));");
    w.line("charsWritten += literal.Length;");
    w.line("return true;");
    w.close();
    w.blank();

    w.line("private static bool TryWriteMember<T>(Span<char> destination, ref int charsWritten, string label, T value, ReadOnlySpan<char> format, IFormatProvider? provider)");
    w.open();
    w.line("var remaining = destination.Slice(charsWritten);");
    w.line("if (remaining.Length < label.Length)");
    w.open();
    w.line("return false;");
    w.close();
    w.blank();
    w.line("int valueWritten;");
    w.line("if (value is ISpanFormattable formattable)");
    w.open();
    w.line("if (!formattable.TryFormat(remaining.Slice(label.Length), out valueWritten, format, provider))");
    w.open();
    w.line("return false;");
    w.close();
    w.close();
    w.line("else");
    w.open();
    w.line("var text = value?.ToString() ?? string.Empty;");
    w.line("if (remaining.Length - label.Length < text.Length)");
    w.open();
    w.line("return false;");
    w.close();
    w.blank();
    w.line("text.AsSpan().CopyTo(remaining.Slice(label.Length));");
    w.line("valueWritten = text.Length;");
    w.close();
    w.blank();
    w.line("label.AsSpan().CopyTo(remaining);");
    w.line("charsWritten += label.Length + valueWritten;");
    w.line("return true;");
    w.close();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_try_format() {
        let mut w = CodeWriter::new(4);
        emit_try_format(&MemberModel::unit("None"), &mut w);

        insta::assert_snapshot!(w.finish().trim_end(), @r###"
        public override bool TryFormat(Span<char> destination, out int charsWritten, ReadOnlySpan<char> format, IFormatProvider? provider)
        {
            charsWritten = 0;
            return TryWriteLiteral(destination, ref charsWritten, "None")
                && TryWriteLiteral(destination, ref charsWritten, " { ")
                && TryWriteLiteral(destination, ref charsWritten, "}");
        }
        "###);
    }

    #[test]
    fn test_payload_try_format() {
        let mut w = CodeWriter::new(4);
        emit_try_format(&MemberModel::with_types("Pair", ["int", "string"]), &mut w);

        let expected = r#"public override bool TryFormat(Span<char> destination, out int charsWritten, ReadOnlySpan<char> format, IFormatProvider? provider)
{
    charsWritten = 0;
    return TryWriteLiteral(destination, ref charsWritten, "Pair")
        && TryWriteLiteral(destination, ref charsWritten, " { ")
        && TryWriteMember(destination, ref charsWritten, "args0 = ", args0, format, provider)
        && TryWriteLiteral(destination, ref charsWritten, ", ")
        && TryWriteMember(destination, ref charsWritten, "args1 = ", args1, format, provider)
        && TryWriteLiteral(destination, ref charsWritten, " }");
}
"#;
        assert_eq!(w.finish(), expected);
    }

    #[test]
    fn test_format_support_members() {
        let schema = SchemaModel::builder("IpAddr").build().unwrap();
        let mut w = CodeWriter::new(4);
        emit_format_support(&schema, &mut w);
        let code = w.finish();

        assert!(code.starts_with("public abstract bool TryFormat("));
        assert!(code.contains("public sealed override string ToString() => ToString(null, null);"));
        assert!(code.contains("private static bool TryWriteLiteral("));
        assert!(code.contains("private static bool TryWriteMember<T>("));
        assert!(code.contains("    if (destination.Length - charsWritten < literal.Length)\n"));
    }
}
