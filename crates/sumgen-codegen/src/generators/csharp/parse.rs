//! `Parse` and `TryParse`.
//!
//! Names are compared with ordinal semantics: exact for case-sensitive
//! parsing and `OrdinalIgnoreCase` otherwise, never culture-aware. The
//! format provider is accepted for signature compatibility and ignored.

use sumgen_core::SchemaModel;

use crate::generators::{csharp_string, CodeWriter};

/// The `Parse` overloads. Only the last one does the work.
pub fn emit_parse(schema: &SchemaModel, w: &mut CodeWriter) {
    let name = &schema.name;

    w.line(format!(
        "public static {} Parse(string s) => Parse(s, false, null);",
        name
    ));
    w.blank();
    w.line(format!(
        "public static {} Parse(string s, bool ignoreCase) => Parse(s, ignoreCase, null);",
        name
    ));
    w.blank();
    w.line(format!(
        "public static {} Parse(string s, IFormatProvider? provider) => Parse(s, false, provider);",
        name
    ));
    w.blank();
    w.line(format!(
        "public static {} Parse(string s, bool ignoreCase, IFormatProvider? provider)",
        name
    ));
    w.open();
    w.line("if (TryParse(s, ignoreCase, provider, out var result))");
    w.open();
    w.line("return result;");
    w.close();
    w.blank();
    w.line(format!(
        "throw new ArgumentException($\"Requested value '{{s}}' was not found in {}.\", nameof(s));",
        name
    ));
    w.close();
}

/// The `TryParse` overloads. On failure `result` is `null`.
pub fn emit_try_parse(schema: &SchemaModel, w: &mut CodeWriter) {
    let out_param = format!("[NotNullWhen(true)] out {}? result", schema.name);

    w.line(format!(
        "public static bool TryParse([NotNullWhen(true)] string? s, {}) => TryParse(s, false, null, out result);",
        out_param
    ));
    w.blank();
    w.line(format!(
        "public static bool TryParse([NotNullWhen(true)] string? s, bool ignoreCase, {}) => TryParse(s, ignoreCase, null, out result);",
        out_param
    ));
    w.blank();
    w.line(format!(
        "public static bool TryParse([NotNullWhen(true)] string? s, IFormatProvider? provider, {}) => TryParse(s, false, provider, out result);",
        out_param
    ));
    w.blank();
    w.line(format!(
        "public static bool TryParse([NotNullWhen(true)] string? s, bool ignoreCase, IFormatProvider? provider, {})",
        out_param
    ));
    w.open();
    if !schema.is_empty() {
        w.line("var comparison = ignoreCase ? StringComparison.OrdinalIgnoreCase : StringComparison.Ordinal;");
        for name in schema.names() {
            w.line(format!(
                "if (string.Equals(s, {}, comparison))",
                csharp_string(name)
            ));
            w.open();
            w.line(format!("result = {}.Default;", name));
            w.line("return true;");
            w.close();
            w.blank();
        }
    }
    w.line("result = null;");
    w.line("return false;");
    w.close();
}
