//! Union types and variant values.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use smallvec::SmallVec;
use sumgen_core::layout::{self, Chunk};
use sumgen_core::{MemberModel, SchemaModel, UnderlyingType};

use crate::error::{Result, RuntimeError, Truncated};
use crate::value::{Value, ValueKind};

#[derive(Debug)]
struct VariantInfo {
    member: Arc<MemberModel>,
    kinds: SmallVec<[ValueKind; 4]>,
    discriminant: i128,
}

/// A union built from a schema, answering every generated operation.
///
/// Each `UnionType` is its own type: values built by one are never variants
/// of another, even when both were built from the same schema.
#[derive(Debug)]
pub struct UnionType {
    /// Shared with every value built by this union; its allocation is the
    /// union's identity.
    name: Arc<str>,
    companion: String,
    underlying: UnderlyingType,
    variants: IndexMap<String, VariantInfo>,
}

/// A member of the companion enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMember<'a> {
    pub name: &'a str,
    pub value: i128,
}

/// An instance of one variant.
///
/// Equality is structural: same union, same variant, equal values.
#[derive(Debug, Clone)]
pub struct VariantValue {
    union: Arc<str>,
    tag: usize,
    member: Arc<MemberModel>,
    args: SmallVec<[Value; 4]>,
}

impl UnionType {
    /// Build the union for `schema`, evaluating its discriminants.
    pub fn from_model(schema: &SchemaModel) -> Result<Self> {
        let discriminants = schema.discriminants()?;

        let variants = schema
            .members()
            .iter()
            .zip(discriminants)
            .map(|(member, discriminant)| {
                let info = VariantInfo {
                    member: Arc::new(member.clone()),
                    kinds: member.value_types.iter().map(ValueKind::of).collect(),
                    discriminant,
                };
                (member.name.clone(), info)
            })
            .collect();

        Ok(Self {
            name: Arc::from(schema.name.as_str()),
            companion: schema.declared_identifier.clone(),
            underlying: schema.underlying,
            variants,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the companion enum.
    pub fn companion_name(&self) -> &str {
        &self.companion
    }

    pub fn underlying(&self) -> UnderlyingType {
        self.underlying
    }

    pub fn count(&self) -> usize {
        self.variants.len()
    }

    /// Variant names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    /// The `Default` instance of the named variant: every value zeroed.
    pub fn default_instance(&self, name: &str) -> Option<VariantValue> {
        let (tag, _, info) = self.variants.get_full(name)?;
        Some(self.instance(tag, info, info.kinds.iter().map(|k| k.zero()).collect()))
    }

    /// Construct the named variant from its values.
    pub fn construct<I>(&self, name: &str, args: I) -> Result<VariantValue>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let (tag, _, info) =
            self.variants
                .get_full(name)
                .ok_or_else(|| RuntimeError::UnknownVariant {
                    union: self.name.to_string(),
                    input: name.to_string(),
                })?;

        let args: SmallVec<[Value; 4]> = args.into_iter().map(Into::into).collect();
        if args.len() != info.kinds.len() {
            return Err(RuntimeError::ArityMismatch {
                variant: name.to_string(),
                expected: info.kinds.len(),
                actual: args.len(),
            });
        }
        for (position, (kind, value)) in info.kinds.iter().zip(&args).enumerate() {
            if !kind.admits(value) {
                return Err(RuntimeError::TypeMismatch {
                    variant: name.to_string(),
                    position,
                    expected: kind.to_string(),
                });
            }
        }

        Ok(self.instance(tag, info, args))
    }

    /// `GetName`: `None` for no value or a value of another union.
    pub fn name_of(&self, value: Option<&VariantValue>) -> Option<&str> {
        self.variant_of(value).map(|(name, _)| name)
    }

    /// `GetNumericValue`.
    pub fn numeric_value(&self, value: Option<&VariantValue>) -> Result<i128> {
        self.variant_of(value)
            .map(|(_, info)| info.discriminant)
            .ok_or_else(|| self.no_match(value))
    }

    /// `ConvertEnum`: the companion member with the variant's name.
    pub fn convert_enum(&self, value: Option<&VariantValue>) -> Result<EnumMember<'_>> {
        self.try_convert_enum(value)
            .ok_or_else(|| self.no_match(value))
    }

    pub fn try_convert_enum(&self, value: Option<&VariantValue>) -> Option<EnumMember<'_>> {
        self.variant_of(value).map(|(name, info)| EnumMember {
            name,
            value: info.discriminant,
        })
    }

    /// `FromEnum`: the default instance of the first member with `value`.
    pub fn from_enum(&self, value: i128) -> Result<VariantValue> {
        self.try_from_enum(value)
            .ok_or_else(|| RuntimeError::UndefinedEnumValue {
                companion: self.companion.clone(),
                value,
            })
    }

    pub fn try_from_enum(&self, value: i128) -> Option<VariantValue> {
        let name = self
            .variants
            .iter()
            .find(|(_, info)| info.discriminant == value)
            .map(|(name, _)| name.as_str())?;
        self.default_instance(name)
    }

    /// `Parse`: the default instance of the variant named `text`.
    pub fn parse(&self, text: &str, ignore_case: bool) -> Result<VariantValue> {
        self.try_parse(text, ignore_case)
            .ok_or_else(|| RuntimeError::UnknownVariant {
                union: self.name.to_string(),
                input: text.to_string(),
            })
    }

    pub fn try_parse(&self, text: &str, ignore_case: bool) -> Option<VariantValue> {
        let name = self.names().find(|name| {
            if ignore_case {
                eq_ordinal_ignore_case(name, text)
            } else {
                *name == text
            }
        })?;
        self.default_instance(name)
    }

    /// `IsDefined(string)`: exact, case-sensitive membership.
    pub fn is_defined_name(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    /// `IsDefined(value)`.
    pub fn is_defined(&self, value: Option<&VariantValue>) -> bool {
        self.variant_of(value).is_some()
    }

    fn instance(&self, tag: usize, info: &VariantInfo, args: SmallVec<[Value; 4]>) -> VariantValue {
        VariantValue {
            union: Arc::clone(&self.name),
            tag,
            member: Arc::clone(&info.member),
            args,
        }
    }

    fn variant_of(&self, value: Option<&VariantValue>) -> Option<(&str, &VariantInfo)> {
        let value = value.filter(|v| Arc::ptr_eq(&v.union, &self.name))?;
        self.variants
            .get_index(value.tag)
            .map(|(name, info)| (name.as_str(), info))
    }

    fn no_match(&self, value: Option<&VariantValue>) -> RuntimeError {
        RuntimeError::NoMatchingVariant {
            union: self.name.to_string(),
            value: value.map(ToString::to_string).unwrap_or_default(),
        }
    }
}

impl VariantValue {
    /// Name of the union this value belongs to.
    pub fn union_name(&self) -> &str {
        &self.union
    }

    pub fn name(&self) -> &str {
        &self.member.name
    }

    /// Declaration index of the variant.
    pub fn tag(&self) -> usize {
        self.tag
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// `TryFormat`: write the formatted text into `destination`.
    ///
    /// Chunks are written whole or not at all. On failure the destination
    /// holds exactly the chunks that fit, and `Truncated::written` says how
    /// many bytes that is.
    pub fn try_format(&self, destination: &mut [u8]) -> std::result::Result<usize, Truncated> {
        let mut written = 0;
        for chunk in layout::chunks(&self.member) {
            let text = self.render(&chunk);
            let bytes = text.as_bytes();
            if destination.len() - written < bytes.len() {
                return Err(Truncated { written });
            }
            destination[written..written + bytes.len()].copy_from_slice(bytes);
            written += bytes.len();
        }
        Ok(written)
    }

    fn render(&self, chunk: &Chunk<'_>) -> String {
        match chunk {
            Chunk::Literal(text) => (*text).to_string(),
            Chunk::Value { label, index } => match self.args.get(*index) {
                Some(value) => format!("{}{}", label, value),
                None => label.clone(),
            },
        }
    }
}

impl PartialEq for VariantValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.union, &other.union) && self.tag == other.tag && self.args == other.args
    }
}

/// `ToString`: the same text `try_format` writes.
impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in layout::chunks(&self.member) {
            f.write_str(&self.render(&chunk))?;
        }
        Ok(())
    }
}

/// Ordinal case-insensitive comparison: chars are compared after simple
/// uppercase mapping, with no culture rules. A char whose uppercase form is
/// more than one char compares as itself.
fn eq_ordinal_ignore_case(a: &str, b: &str) -> bool {
    let mut a = a.chars().map(simple_upper);
    let mut b = b.chars().map(simple_upper);
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x == y => {}
            _ => return false,
        }
    }
}

fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
