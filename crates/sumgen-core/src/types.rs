//! Core value types shared by schemas and members.

use std::fmt;
use std::str::FromStr;

use crate::errors::ModelError;

/// A resolved type identifier for an associated value (e.g. `byte`, `string`,
/// `global::System.Net.IPAddress`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TypeRef(pub String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        TypeRef(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeRef {
    fn from(s: &str) -> Self {
        TypeRef(s.to_string())
    }
}

impl From<String> for TypeRef {
    fn from(s: String) -> Self {
        TypeRef(s)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One declared type slot of a raw member, as handed over by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum TypeSlot {
    /// The host resolved the slot to a canonical type.
    Resolved(TypeRef),
    /// The host could not resolve the slot; holds the raw argument text.
    Unresolved { unresolved: String },
}

impl From<&str> for TypeSlot {
    fn from(s: &str) -> Self {
        TypeSlot::Resolved(TypeRef::from(s))
    }
}

impl From<TypeRef> for TypeSlot {
    fn from(t: TypeRef) -> Self {
        TypeSlot::Resolved(t)
    }
}

/// Integer type backing the companion plain enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnderlyingType {
    #[default]
    Byte,
    SByte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
}

impl UnderlyingType {
    /// The C# keyword for this type.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::SByte => "sbyte",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
        }
    }

    /// Smallest representable value.
    pub fn min_value(&self) -> i128 {
        match self {
            Self::Byte | Self::UShort | Self::UInt | Self::ULong => 0,
            Self::SByte => i8::MIN as i128,
            Self::Short => i16::MIN as i128,
            Self::Int => i32::MIN as i128,
            Self::Long => i64::MIN as i128,
        }
    }

    /// Largest representable value.
    pub fn max_value(&self) -> i128 {
        match self {
            Self::Byte => u8::MAX as i128,
            Self::SByte => i8::MAX as i128,
            Self::Short => i16::MAX as i128,
            Self::UShort => u16::MAX as i128,
            Self::Int => i32::MAX as i128,
            Self::UInt => u32::MAX as i128,
            Self::Long => i64::MAX as i128,
            Self::ULong => u64::MAX as i128,
        }
    }

    pub fn contains(&self, value: i128) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }
}

impl FromStr for UnderlyingType {
    type Err = ModelError;

    /// Accepts the C# keyword or the `System` type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix("global::").unwrap_or(name);
        let name = name.strip_prefix("System.").unwrap_or(name);
        match name {
            "byte" | "Byte" => Ok(Self::Byte),
            "sbyte" | "SByte" => Ok(Self::SByte),
            "short" | "Int16" => Ok(Self::Short),
            "ushort" | "UInt16" => Ok(Self::UShort),
            "int" | "Int32" => Ok(Self::Int),
            "uint" | "UInt32" => Ok(Self::UInt),
            "long" | "Int64" => Ok(Self::Long),
            "ulong" | "UInt64" => Ok(Self::ULong),
            _ => Err(ModelError::UnknownUnderlyingType(s.to_string())),
        }
    }
}

impl fmt::Display for UnderlyingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Declared accessibility, echoed onto the emitted types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Accessibility {
    #[default]
    Public,
    Internal,
}

impl Accessibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
        }
    }
}

/// Lexical context of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Nesting {
    #[default]
    TopLevel,
    /// Declared inside another type.
    Nested { parent: String },
}

impl Nesting {
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested { .. })
    }
}

/// Source location for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Location {
    pub file: Option<String>,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: Some(file.into()),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}({},{})", file, self.line, self.column),
            None => write!(f, "({},{})", self.line, self.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underlying_from_keyword_and_system_name() {
        assert_eq!("byte".parse::<UnderlyingType>().unwrap(), UnderlyingType::Byte);
        assert_eq!("System.Int32".parse::<UnderlyingType>().unwrap(), UnderlyingType::Int);
        assert_eq!(
            "global::System.UInt64".parse::<UnderlyingType>().unwrap(),
            UnderlyingType::ULong
        );
        assert!("decimal".parse::<UnderlyingType>().is_err());
    }

    #[test]
    fn test_underlying_ranges() {
        assert!(UnderlyingType::Byte.contains(255));
        assert!(!UnderlyingType::Byte.contains(256));
        assert!(!UnderlyingType::Byte.contains(-1));
        assert!(UnderlyingType::SByte.contains(-128));
        assert!(UnderlyingType::ULong.contains(u64::MAX as i128));
    }

    #[test]
    fn test_default_underlying_is_byte() {
        assert_eq!(UnderlyingType::default().keyword(), "byte");
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::new("Enums.cs", 12, 5).to_string(), "Enums.cs(12,5)");
        assert_eq!(Location::default().to_string(), "(0,0)");
    }
}
