//! Conversion to and from the companion enum.

use sumgen_core::SchemaModel;

use super::{companion_name, undefined_value_throw};
use crate::generators::CodeWriter;

/// `ConvertEnum`: variant → companion member of the same name.
pub fn emit_convert_enum(schema: &SchemaModel, w: &mut CodeWriter) {
    let companion = companion_name(schema);

    w.line(format!(
        "public static {} ConvertEnum({}? value) => value switch",
        companion, schema.name
    ));
    w.open();
    for name in schema.names() {
        w.line(format!("{} => {}.{},", name, companion, name));
    }
    w.line(format!("_ => {},", undefined_value_throw(schema)));
    w.close_with("};");
}

pub fn emit_try_convert_enum(schema: &SchemaModel, w: &mut CodeWriter) {
    let companion = companion_name(schema);

    w.line(format!(
        "public static bool TryConvertEnum({}? value, out {} result)",
        schema.name, companion
    ));
    w.open();
    w.line("switch (value)");
    w.open();
    for name in schema.names() {
        w.line(format!("case {}:", name));
        w.indented(|w| {
            w.line(format!("result = {}.{};", companion, name));
            w.line("return true;");
        });
    }
    w.line("default:");
    w.indented(|w| {
        w.line("result = default;");
        w.line("return false;");
    });
    w.close();
    w.close();
}

/// `FromEnum`: companion member → that variant's default instance.
pub fn emit_from_enum(schema: &SchemaModel, w: &mut CodeWriter) {
    let companion = companion_name(schema);

    w.line(format!(
        "public static {} FromEnum({} value) => value switch",
        schema.name, companion
    ));
    w.open();
    for name in schema.names() {
        w.line(format!("{}.{} => {}.Default,", companion, name, name));
    }
    w.line(format!(
        "_ => throw new ArgumentException($\"Value is not a defined {} member: {{value}}\", nameof(value)),",
        companion
    ));
    w.close_with("};");
}

pub fn emit_try_from_enum(schema: &SchemaModel, w: &mut CodeWriter) {
    let companion = companion_name(schema);

    w.line(format!(
        "public static bool TryFromEnum({} value, [NotNullWhen(true)] out {}? result)",
        companion, schema.name
    ));
    w.open();
    if schema.is_empty() {
        w.line("result = null;");
        w.line("return false;");
        w.close();
        return;
    }

    w.line("result = value switch");
    w.open();
    for name in schema.names() {
        w.line(format!("{}.{} => {}.Default,", companion, name, name));
    }
    w.line("_ => null,");
    w.close_with("};");
    w.line("return result is not null;");
    w.close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use sumgen_core::MemberModel;

    fn ip_addr() -> SchemaModel {
        SchemaModel::builder("IpAddr")
            .member(MemberModel::with_types("V4", ["byte", "byte", "byte", "byte"]))
            .member(MemberModel::with_types("V6", ["string"]))
            .build()
            .unwrap()
    }

    fn emit(f: fn(&SchemaModel, &mut CodeWriter), schema: &SchemaModel) -> String {
        let mut w = CodeWriter::new(4);
        f(schema, &mut w);
        w.finish()
    }

    #[test]
    fn test_convert_enum() {
        let code = emit(emit_convert_enum, &ip_addr());
        insta::assert_snapshot!(code.trim_end(), @r###"
        public static IpAddrVariant ConvertEnum(IpAddr? value) => value switch
        {
            V4 => IpAddrVariant.V4,
            V6 => IpAddrVariant.V6,
            _ => throw new ArgumentException($"Value is not a defined IpAddr variant: {value}", nameof(value)),
        };
        "###);
    }

    #[test]
    fn test_try_convert_enum() {
        let expected = "public static bool TryConvertEnum(IpAddr? value, out IpAddrVariant result)
{
    switch (value)
    {
        case V4:
            result = IpAddrVariant.V4;
            return true;
        case V6:
            result = IpAddrVariant.V6;
            return true;
        default:
            result = default;
            return false;
    }
}
";
        assert_eq!(emit(emit_try_convert_enum, &ip_addr()), expected);
    }

    #[test]
    fn test_empty_try_convert_enum_always_fails() {
        let schema = SchemaModel::builder("None").build().unwrap();
        let code = emit(emit_try_convert_enum, &schema);
        assert!(!code.contains("case "));
        assert!(code.contains("        default:\n            result = default;\n            return false;\n"));
    }

    #[test]
    fn test_from_enum() {
        let code = emit(emit_from_enum, &ip_addr());
        assert!(code.starts_with("public static IpAddr FromEnum(IpAddrVariant value) => value switch\n"));
        assert!(code.contains("    IpAddrVariant.V4 => V4.Default,\n"));
        assert!(code.contains("    IpAddrVariant.V6 => V6.Default,\n"));
        assert!(code.contains("Value is not a defined IpAddrVariant member"));
    }

    #[test]
    fn test_try_from_enum() {
        let code = emit(emit_try_from_enum, &ip_addr());
        assert!(code.contains("[NotNullWhen(true)] out IpAddr? result"));
        assert!(code.contains("    return result is not null;\n"));

        let schema = SchemaModel::builder("None").build().unwrap();
        let code = emit(emit_try_from_enum, &schema);
        assert!(code.contains("    result = null;\n    return false;\n"));
    }
}
