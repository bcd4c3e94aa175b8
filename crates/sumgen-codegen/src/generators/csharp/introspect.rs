//! Name, count, numeric value, and membership lookups.

use sumgen_core::SchemaModel;

use super::{companion_name, undefined_value_throw};
use crate::generators::{csharp_string, CodeWriter};

pub fn emit_count(schema: &SchemaModel, w: &mut CodeWriter) {
    w.line(format!("public const int Count = {};", schema.count()));
}

/// `GetName`: the variant name, or `null` when nothing matches.
pub fn emit_get_name(schema: &SchemaModel, w: &mut CodeWriter) {
    w.line(format!(
        "public static string? GetName({}? value) => value switch",
        schema.name
    ));
    w.open();
    for name in schema.names() {
        w.line(format!("{} => {},", name, csharp_string(name)));
    }
    w.line("_ => null,");
    w.close_with("};");
}

/// `GetNames`: declared names in declaration order.
pub fn emit_get_names(schema: &SchemaModel, w: &mut CodeWriter) {
    if schema.is_empty() {
        w.line("public static string[] GetNames() => Array.Empty<string>();");
        return;
    }

    let names = schema
        .names()
        .map(csharp_string)
        .collect::<Vec<_>>()
        .join(", ");
    w.line(format!(
        "public static string[] GetNames() => new[] {{ {} }};",
        names
    ));
}

/// `GetNumericValue`: the companion enum value cast to the underlying type.
pub fn emit_get_numeric_value(schema: &SchemaModel, w: &mut CodeWriter) {
    let underlying = schema.underlying.keyword();
    let companion = companion_name(schema);

    w.line(format!(
        "public static {} GetNumericValue({}? value) => value switch",
        underlying, schema.name
    ));
    w.open();
    for name in schema.names() {
        w.line(format!("{} => ({}){}.{},", name, underlying, companion, name));
    }
    w.line(format!("_ => {},", undefined_value_throw(schema)));
    w.close_with("};");
}

/// Both `IsDefined` overloads. The name overload is exact-match only.
pub fn emit_is_defined(schema: &SchemaModel, w: &mut CodeWriter) {
    if schema.is_empty() {
        w.line("public static bool IsDefined(string? name) => false;");
        w.blank();
        w.line(format!(
            "public static bool IsDefined({}? value) => false;",
            schema.name
        ));
        return;
    }

    let names = schema
        .names()
        .map(csharp_string)
        .collect::<Vec<_>>()
        .join(" or ");
    w.line(format!(
        "public static bool IsDefined(string? name) => name is {};",
        names
    ));
    w.blank();

    let types = schema.names().collect::<Vec<_>>().join(" or ");
    w.line(format!(
        "public static bool IsDefined({}? value) => value is {};",
        schema.name, types
    ));
}
