//! Executable model of generated tagged unions.
//!
//! [`UnionType`] interprets a [`SchemaModel`](sumgen_core::SchemaModel) the
//! way the generated C# code behaves: default instances, structural
//! equality, chunked formatting into bounded buffers, ordinal parsing, and
//! conversion to and from the companion enum. It lets those behaviors be
//! checked in Rust without a C# toolchain.
//!
//! Formatting writes UTF-8 bytes, so buffer capacities and written counts are
//! in bytes rather than UTF-16 code units.

pub mod error;
pub mod union;
pub mod value;

pub use error::{Result, RuntimeError, Truncated};
pub use union::{EnumMember, UnionType, VariantValue};
pub use value::{Value, ValueKind};
