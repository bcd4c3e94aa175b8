//! Associated values and their C# rendering.

use std::fmt;

use sumgen_core::TypeRef;

/// A value carried by a variant.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    /// A null reference.
    Null,
}

/// How a declared value type behaves in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Str,
    /// Any type the model does not know, including nullable types.
    /// Defaults to null and admits every value.
    Other,
}

impl ValueKind {
    /// Classify a type by its keyword or `System` name.
    pub fn of(ty: &TypeRef) -> Self {
        let name = ty.as_str().trim();
        let name = name.strip_prefix("global::").unwrap_or(name);
        let name = name.strip_prefix("System.").unwrap_or(name);

        match name {
            "bool" | "Boolean" => Self::Bool,
            "char" | "Char" => Self::Char,
            "sbyte" | "SByte" => Self::I8,
            "short" | "Int16" => Self::I16,
            "int" | "Int32" => Self::I32,
            "long" | "Int64" => Self::I64,
            "byte" | "Byte" => Self::U8,
            "ushort" | "UInt16" => Self::U16,
            "uint" | "UInt32" => Self::U32,
            "ulong" | "UInt64" => Self::U64,
            "float" | "Single" => Self::F32,
            "double" | "Double" => Self::F64,
            "string" | "String" => Self::Str,
            _ => Self::Other,
        }
    }

    /// The value `default(T)` produces.
    pub fn zero(self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::Char => Value::Char('\0'),
            Self::I8 => Value::I8(0),
            Self::I16 => Value::I16(0),
            Self::I32 => Value::I32(0),
            Self::I64 => Value::I64(0),
            Self::U8 => Value::U8(0),
            Self::U16 => Value::U16(0),
            Self::U32 => Value::U32(0),
            Self::U64 => Value::U64(0),
            Self::F32 => Value::F32(0.0),
            Self::F64 => Value::F64(0.0),
            Self::Str | Self::Other => Value::Null,
        }
    }

    /// Whether `value` can be stored in a slot of this kind.
    pub fn admits(self, value: &Value) -> bool {
        match (self, value) {
            (Self::Other, _) => true,
            (Self::Str, Value::Str(_) | Value::Null) => true,
            (kind, value) => value.kind() == Some(kind),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "sbyte",
            Self::I16 => "short",
            Self::I32 => "int",
            Self::I64 => "long",
            Self::U8 => "byte",
            Self::U16 => "ushort",
            Self::U32 => "uint",
            Self::U64 => "ulong",
            Self::F32 => "float",
            Self::F64 => "double",
            Self::Str => "string",
            Self::Other => "object",
        };
        f.write_str(keyword)
    }
}

impl Value {
    /// The kind this value belongs to, `None` for null.
    pub fn kind(&self) -> Option<ValueKind> {
        Some(match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Char(_) => ValueKind::Char,
            Self::I8(_) => ValueKind::I8,
            Self::I16(_) => ValueKind::I16,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::U8(_) => ValueKind::U8,
            Self::U16(_) => ValueKind::U16,
            Self::U32(_) => ValueKind::U32,
            Self::U64(_) => ValueKind::U64,
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::Str(_) => ValueKind::Str,
            Self::Null => return None,
        })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Equality as `EqualityComparer<T>.Default` sees it: NaN equals NaN and
/// the two zeros are equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::I8(a), Self::I8(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::U8(a), Self::U8(b)) => a == b,
            (Self::U16(a), Self::U16(b)) => a == b,
            (Self::U32(a), Self::U32(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::F64(a), Self::F64(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

/// Renders like `ToString()` under the invariant culture. Null renders as
/// nothing.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Char(c) => write!(f, "{}", c),
            Self::I8(v) => write!(f, "{}", v),
            Self::I16(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::U8(v) => write!(f, "{}", v),
            Self::U16(v) => write!(f, "{}", v),
            Self::U32(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            Self::F32(v) => write_float(f, *v as f64, format!("{:e}", v), 7),
            Self::F64(v) => write_float(f, *v, format!("{:e}", v), 15),
            Self::Str(s) => f.write_str(s),
            Self::Null => Ok(()),
        }
    }
}

/// Shortest round-trip digits, switching to `1E+15` style notation once the
/// decimal exponent reaches `precision` or drops below -4.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64, scientific: String, precision: i32) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("NaN");
    }
    if v.is_infinite() {
        return f.write_str(if v < 0.0 { "-∞" } else { "∞" });
    }

    let (mantissa, exponent) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
        .unwrap_or((scientific.as_str(), 0));

    if v != 0.0 && (exponent >= precision || exponent < -4) {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{}E{}{:02}", mantissa, sign, exponent.abs())
    } else {
        // Decimal notation from the same shortest digits.
        let negative = mantissa.starts_with('-');
        let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
        let point = digits.len() as i32;
        let shifted = exponent + 1;

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        if shifted <= 0 {
            out.push_str("0.");
            out.extend(std::iter::repeat('0').take((-shifted) as usize));
            out.push_str(&digits);
        } else if shifted >= point {
            out.push_str(&digits);
            out.extend(std::iter::repeat('0').take((shifted - point) as usize));
        } else {
            out.push_str(&digits[..shifted as usize]);
            out.push('.');
            out.push_str(&digits[shifted as usize..]);
        }
        f.write_str(&out)
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
