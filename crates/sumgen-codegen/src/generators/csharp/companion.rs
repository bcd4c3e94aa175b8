//! The companion plain enum.

use sumgen_core::SchemaModel;

use super::companion_name;
use crate::generators::CodeWriter;

/// Same member names, order, and underlying type as the schema. Explicit
/// literals are copied verbatim so the enum numbers exactly like the
/// declaration it mirrors.
pub fn emit_companion_enum(schema: &SchemaModel, w: &mut CodeWriter) {
    w.line(format!(
        "{} enum {} : {}",
        schema.accessibility.keyword(),
        companion_name(schema),
        schema.underlying.keyword()
    ));
    w.open();
    for member in schema.members() {
        match &member.literal {
            Some(literal) => w.line(format!("{} = {},", member.name, literal.as_str())),
            None => w.line(format!("{},", member.name)),
        }
    }
    w.close();
}
