/*!
# Numeric Tokens

Converts textual tokens such as `42`, `-0x1F`, `+0b101` or `3.9` into integers
([`parse_integer`]) or into integral floats of unbounded magnitude ([`parse_number`]).
Failures are reported as `None` so callers can decide whether to fall back to a default
(edge weights) or to report the offending token (number lists).

```
use textgraphs::token::*;

assert_eq!(parse_integer("0x1f"), Some(31));
assert_eq!(parse_integer("-0b101"), Some(-5));
assert_eq!(parse_integer(" 3.9 "), Some(3));
assert_eq!(parse_integer("abc"), None);
assert_eq!(parse_number("1e20"), Some(1e20));
```
*/

use num::ToPrimitive;

use crate::{Weight, error::*};

/// Unsigned part of a numeric token
enum Literal<'a> {
    /// Validated digits in the given radix
    Radix(&'a str, u32),
    Decimal(f64),
}

/// Splits a token into its sign and literal
fn split_literal(token: &str) -> Option<(bool, Literal<'_>)> {
    let token = token.trim();

    let (negative, unsigned) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };

    let literal = if let Some(digits) = strip_radix_prefix(unsigned, 'x', |c| c.is_ascii_hexdigit()) {
        Literal::Radix(digits, 16)
    } else if let Some(digits) = strip_radix_prefix(unsigned, 'b', |c| c == '0' || c == '1') {
        Literal::Radix(digits, 2)
    } else if unsigned.starts_with(['+', '-']) {
        return None;
    } else {
        Literal::Decimal(unsigned.parse().ok()?)
    };

    Some((negative, literal))
}

/// Parses a (signed) decimal, `0x`-hexadecimal or `0b`-binary token.
/// Decimal numbers may be fractional and are truncated toward zero.
/// Values outside of the range of `i64` fail.
pub fn parse_integer(token: &str) -> Option<i64> {
    let (negative, literal) = split_literal(token)?;

    let magnitude = match literal {
        Literal::Radix(digits, radix) => i64::from_str_radix(digits, radix).ok()?,
        Literal::Decimal(value) if value.is_finite() => value.trunc().to_i64()?,
        Literal::Decimal(_) => return None,
    };

    if negative {
        magnitude.checked_neg()
    } else {
        Some(magnitude)
    }
}

/// Same syntax as [`parse_integer`], but the integral value is returned as a float.
/// Only malformed tokens and non-finite values fail, so magnitudes beyond `i64` are kept.
pub fn parse_number(token: &str) -> Option<f64> {
    let (negative, literal) = split_literal(token)?;

    let magnitude = match literal {
        Literal::Radix(digits, radix) => digits.chars().try_fold(0.0, |acc: f64, c| {
            Some(acc * radix as f64 + c.to_digit(radix)? as f64)
        })?,
        Literal::Decimal(value) => value.trunc(),
    };

    if !magnitude.is_finite() {
        return None;
    }

    Some(if negative { -magnitude } else { magnitude })
}

/// Returns the digits following `0<marker>` (case-insensitive) if there is at least one
/// and all of them satisfy `is_digit`
fn strip_radix_prefix(token: &str, marker: char, is_digit: impl Fn(char) -> bool) -> Option<&str> {
    let mut chars = token.chars();
    if chars.next()? != '0' || !chars.next()?.eq_ignore_ascii_case(&marker) {
        return None;
    }

    let digits = &token[2..];
    (!digits.is_empty() && digits.chars().all(is_digit)).then_some(digits)
}

/// Interprets a token as an edge weight
pub fn coerce_weight(token: &str) -> Option<Weight> {
    parse_number(token)
}

/// Parses a list of integers separated by whitespace and/or commas.
///
/// # Errors
/// Fails with [`ParseError::InvalidToken`] naming the first token that is not a number.
pub fn parse_integer_list(text: &str) -> Result<Vec<i64>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| parse_integer(t).ok_or_else(|| ParseError::InvalidToken(t.to_string())))
        .collect()
}
