//! Variant records and their default instances.

use sumgen_core::{MemberModel, SchemaModel};

use super::format::emit_try_format;
use crate::generators::CodeWriter;

/// Private constructor that closes the hierarchy to the nested variants.
pub fn emit_base_constructor(schema: &SchemaModel, w: &mut CodeWriter) {
    w.line(format!("private {}()", schema.name));
    w.open();
    w.close();
}

/// A sealed record for `member`. Values become positional parameters
/// `args0, args1, …`, which gives records their structural equality.
pub fn emit_variant(schema: &SchemaModel, member: &MemberModel, w: &mut CodeWriter) {
    if member.is_unit() {
        w.line(format!(
            "public sealed partial record {} : {}",
            member.name, schema.name
        ));
    } else {
        let params = member
            .args()
            .map(|(name, ty)| format!("{} {}", ty, name))
            .collect::<Vec<_>>()
            .join(", ");
        w.line(format!(
            "public sealed partial record {}({}) : {}",
            member.name, params, schema.name
        ));
    }
    w.open();
    emit_default_instance(member, w);
    w.blank();
    emit_try_format(member, w);
    w.close();
}

/// `Default`: every value is its type's zero value.
pub fn emit_default_instance(member: &MemberModel, w: &mut CodeWriter) {
    let args = vec!["default!"; member.arity()].join(", ");
    w.line(format!(
        "public static readonly {} Default = new({});",
        member.name, args
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_default() {
        let mut w = CodeWriter::new(4);
        emit_default_instance(&MemberModel::unit("None"), &mut w);
        assert_eq!(w.finish(), "public static readonly None Default = new();\n");
    }

    #[test]
    fn test_payload_default() {
        let mut w = CodeWriter::new(4);
        emit_default_instance(
            &MemberModel::with_types("V4", ["byte", "byte", "byte", "byte"]),
            &mut w,
        );
        assert_eq!(
            w.finish(),
            "public static readonly V4 Default = new(default!, default!, default!, default!);\n"
        );
    }

    #[test]
    fn test_variant_header() {
        let schema = SchemaModel::builder("IpAddr")
            .member(MemberModel::with_types("V4", ["byte", "byte", "byte", "byte"]))
            .member(MemberModel::unit("None"))
            .build()
            .unwrap();

        let mut w = CodeWriter::new(4);
        emit_variant(&schema, &schema.members()[0], &mut w);
        let code = w.finish();
        assert!(code.starts_with(
            "public sealed partial record V4(byte args0, byte args1, byte args2, byte args3) : IpAddr\n{\n"
        ));
        assert!(code.contains("    public override bool TryFormat("));
        assert!(code.ends_with("}\n"));

        let mut w = CodeWriter::new(4);
        emit_variant(&schema, &schema.members()[1], &mut w);
        assert!(w.finish().starts_with("public sealed partial record None : IpAddr\n{\n"));
    }

    #[test]
    fn test_base_constructor() {
        let schema = SchemaModel::builder("IpAddr").build().unwrap();
        let mut w = CodeWriter::new(4);
        emit_base_constructor(&schema, &mut w);
        assert_eq!(w.finish(), "private IpAddr()\n{\n}\n");
    }
}
