//! Text layout of a formatted variant.
//!
//! A variant formats as `Name { }` when it carries no values and as
//! `Name { args0 = v0, args1 = v1 }` otherwise. The layout is split into
//! chunks that are written atomically: a writer checks capacity before each
//! chunk and stops at the first one that does not fit, so the amount written
//! is always a whole number of chunks.

use crate::schema::{arg_name, MemberModel};

/// Written after the variant name.
pub const OPEN: &str = " { ";
/// Written between two labelled values.
pub const SEPARATOR: &str = ", ";
/// Closes a variant with values.
pub const CLOSE: &str = " }";
/// Closes a unit variant, giving `Name { }`.
pub const CLOSE_UNIT: &str = "}";

/// One atomically written piece of a formatted variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk<'a> {
    Literal(&'a str),
    /// `label` followed by the rendering of value `index`.
    Value { label: String, index: usize },
}

/// Label written before a positional value, e.g. `args0 = `.
pub fn value_label(index: usize) -> String {
    format!("{} = ", arg_name(index))
}

/// The chunks of `member`'s formatted text, in write order.
pub fn chunks(member: &MemberModel) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::with_capacity(3 + member.arity() * 2);
    chunks.push(Chunk::Literal(member.name.as_str()));
    chunks.push(Chunk::Literal(OPEN));

    if member.is_unit() {
        chunks.push(Chunk::Literal(CLOSE_UNIT));
        return chunks;
    }

    for index in 0..member.arity() {
        if index > 0 {
            chunks.push(Chunk::Literal(SEPARATOR));
        }
        chunks.push(Chunk::Value {
            label: value_label(index),
            index,
        });
    }
    chunks.push(Chunk::Literal(CLOSE));
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_layout() {
        let member = MemberModel::unit("None");
        assert_eq!(
            chunks(&member),
            vec![
                Chunk::Literal("None"),
                Chunk::Literal(" { "),
                Chunk::Literal("}"),
            ]
        );
    }

    #[test]
    fn test_value_layout() {
        let member = MemberModel::with_types("Pair", ["int", "int"]);
        assert_eq!(
            chunks(&member),
            vec![
                Chunk::Literal("Pair"),
                Chunk::Literal(" { "),
                Chunk::Value {
                    label: "args0 = ".to_string(),
                    index: 0
                },
                Chunk::Literal(", "),
                Chunk::Value {
                    label: "args1 = ".to_string(),
                    index: 1
                },
                Chunk::Literal(" }"),
            ]
        );
    }
}
