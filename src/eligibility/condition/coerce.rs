// SPDX-License-Identifier: MIT

//! Shared coercion rules
//!
//! Criteria data relies on loose comparisons: `"5"` equals `5`, `"10"` is
//! greater than `9`. Every comparison in the evaluator goes through
//! [`coerce_to_number`] or [`loose_equals`] so the rules live in one place.

use serde_json::Value;

/// Coerce a value to a number.
///
/// - `null` is 0, `true` is 1, `false` is 0
/// - strings are trimmed; empty is 0; decimal, `0x`/`0o`/`0b` and
///   `Infinity` literals parse; anything else is NaN
/// - arrays coerce through their joined string form, so `[]` is 0,
///   `[8]` is 8 and `[1, 2]` is NaN
/// - objects are NaN
pub fn coerce_to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(items) => parse_number(&join_array(items)),
        Value::Object(_) => f64::NAN,
    }
}

/// Loose equality between two values.
///
/// `null` only equals `null`. Strings compare as strings and booleans as
/// booleans; any other scalar pairing compares numerically. An array
/// compared with a scalar stands in for its joined string form
/// (`["sale"]` equals `"sale"`, `[5]` equals `5`). Two arrays, or anything
/// involving an object, are never equal.
pub fn loose_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Object(_), _) | (_, Value::Object(_)) => false,
        (Value::Array(_), Value::Array(_)) => false,
        (Value::Array(items), scalar) | (scalar, Value::Array(items)) => {
            loose_equals(&Value::String(join_array(items)), scalar)
        }
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => coerce_to_number(left) == coerce_to_number(right),
    }
}

/// Primitive string form of an array: elements joined with `,`, null
/// elements empty, nested arrays flattened the same way.
fn join_array(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(n),
            Value::String(s) => s.clone(),
            Value::Array(nested) => join_array(nested),
            Value::Object(_) => "[object Object]".to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

// Integral floats print without a fraction ("5", not "5.0").
fn format_number(n: &serde_json::Number) -> String {
    match (n.as_i64(), n.as_u64(), n.as_f64()) {
        (Some(i), _, _) => i.to_string(),
        (_, Some(u), _) => u.to_string(),
        (_, _, Some(f)) => f.to_string(),
        _ => n.to_string(),
    }
}

fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = parse_radix_literal(s) {
        return n;
    }

    if is_decimal_literal(s) {
        s.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// `0x1F`, `0o17`, `0b101`. Unsigned only.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let parsed = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(parsed.unwrap_or(f64::NAN))
}

/// Optional sign, digits with an optional fraction (at least one digit
/// overall), then an optional exponent.
fn is_decimal_literal(s: &str) -> bool {
    let mut chars = s.chars().peekable();

    if matches!(chars.peek(), Some('+') | Some('-')) {
        chars.next();
    }

    let mut mantissa_digits = 0;
    while chars.peek().is_some_and(char::is_ascii_digit) {
        chars.next();
        mantissa_digits += 1;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        while chars.peek().is_some_and(char::is_ascii_digit) {
            chars.next();
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }

    if matches!(chars.peek(), Some('e') | Some('E')) {
        chars.next();
        if matches!(chars.peek(), Some('+') | Some('-')) {
            chars.next();
        }
        let mut exponent_digits = 0;
        while chars.peek().is_some_and(char::is_ascii_digit) {
            chars.next();
            exponent_digits += 1;
        }
        if exponent_digits == 0 {
            return false;
        }
    }

    chars.next().is_none()
}
