//! Evaluation of explicit discriminant literals.
//!
//! Literals are carried verbatim into emitted code. They are only evaluated
//! when a numeric value is needed on the Rust side, e.g. by the reference
//! runtime or for range checks.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while},
    character::complete::{char, multispace0, satisfy},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

/// An explicit discriminant, kept exactly as the schema author wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NumericLiteral(String);

impl NumericLiteral {
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        NumericLiteral(text.trim().to_string())
    }

    /// The literal text, trimmed of surrounding whitespace.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Evaluate the literal.
    ///
    /// Returns `None` for anything that is not a plain integer literal, such
    /// as constant expressions referring to other members.
    pub fn evaluate(&self) -> Option<i128> {
        evaluate(&self.0)
    }
}

impl From<&str> for NumericLiteral {
    fn from(s: &str) -> Self {
        NumericLiteral::new(s)
    }
}

impl From<i64> for NumericLiteral {
    fn from(v: i64) -> Self {
        NumericLiteral(v.to_string())
    }
}

/// Evaluate an integer literal: optional sign, decimal, `0x` hex or `0b`
/// binary digits with `_` separators, and an optional `u`/`l`/`ul` suffix.
pub fn evaluate(text: &str) -> Option<i128> {
    all_consuming(integer_literal)(text).ok().map(|(_, value)| value)
}

fn integer_literal(input: &str) -> IResult<&str, i128> {
    map_res(
        delimited(
            multispace0,
            tuple((
                opt(alt((char('-'), char('+')))),
                multispace0,
                magnitude,
                opt(suffix),
            )),
            multispace0,
        ),
        |(sign, _, magnitude, _)| {
            i128::try_from(magnitude).map(|v| if sign == Some('-') { -v } else { v })
        },
    )(input)
}

fn magnitude(input: &str) -> IResult<&str, u128> {
    alt((
        map_res(preceded(tag_no_case("0x"), digits(16)), |d| from_digits(d, 16)),
        map_res(preceded(tag_no_case("0b"), digits(2)), |d| from_digits(d, 2)),
        map_res(digits(10), |d| from_digits(d, 10)),
    ))(input)
}

/// A digit run in `radix`; `_` separators are allowed after the first digit.
fn digits<'a>(radix: u32) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    recognize(pair(
        satisfy(move |c: char| c.is_digit(radix)),
        take_while(move |c: char| c == '_' || c.is_digit(radix)),
    ))
}

fn suffix(input: &str) -> IResult<&str, &str> {
    alt((
        tag_no_case("ul"),
        tag_no_case("lu"),
        tag_no_case("u"),
        tag_no_case("l"),
    ))(input)
}

fn from_digits(digits: &str, radix: u32) -> Result<u128, std::num::ParseIntError> {
    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    u128::from_str_radix(&cleaned, radix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(evaluate("0"), Some(0));
        assert_eq!(evaluate("42"), Some(42));
        assert_eq!(evaluate("1_000"), Some(1000));
        assert_eq!(evaluate("  7 "), Some(7));
    }

    #[test]
    fn test_hex_and_binary() {
        assert_eq!(evaluate("0x10"), Some(16));
        assert_eq!(evaluate("0XfF"), Some(255));
        assert_eq!(evaluate("0b101"), Some(5));
        assert_eq!(evaluate("0b1111_0000"), Some(240));
    }

    #[test]
    fn test_sign_and_suffix() {
        assert_eq!(evaluate("-3"), Some(-3));
        assert_eq!(evaluate("+3"), Some(3));
        assert_eq!(evaluate("255u"), Some(255));
        assert_eq!(evaluate("10UL"), Some(10));
        assert_eq!(evaluate("0xFFl"), Some(255));
    }

    #[test]
    fn test_rejects_non_literals() {
        assert_eq!(evaluate(""), None);
        assert_eq!(evaluate("A | B"), None);
        assert_eq!(evaluate("1.5"), None);
        assert_eq!(evaluate("0x"), None);
        assert_eq!(evaluate("_1"), None);
        assert_eq!(evaluate("12z"), None);
    }

    #[test]
    fn test_literal_keeps_text_verbatim() {
        let lit = NumericLiteral::new(" 0x10 ");
        assert_eq!(lit.as_str(), "0x10");
        assert_eq!(lit.evaluate(), Some(16));
    }
}
