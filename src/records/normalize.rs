//! Row normalization
//!
//! Converts one wire-format row into its normalized form:
//! - field names go from snake_case to camelCase
//! - string values that look like numbers, booleans, or null are coerced
//!   to their native types
//!
//! The coercion is lossy by contract: a genuine string payload `"true"`
//! or `"00100"` is indistinguishable from the typed value after
//! normalization. Callers that need the raw wire value must keep the
//! un-normalized row.

use super::value::{FieldValue, Record};

/// Convert a wire-format field name to camelCase
///
/// Each underscore followed by a lowercase ASCII letter is replaced by
/// that letter upper-cased; every other character passes through
/// unchanged. `total_count` becomes `totalCount`, `_id` becomes `Id`,
/// `user_1` stays `user_1`.
pub fn camel_case_key(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            match chars.peek() {
                Some(next) if next.is_ascii_lowercase() => {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => out.push('_'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Normalize one wire-format row
///
/// Pure and total: every well-formed row maps to a row, no failures.
pub fn normalize_record(row: Record) -> Record {
    row.into_iter()
        .map(|(key, value)| (camel_case_key(&key), coerce(value)))
        .collect()
}

/// Coerce a single wire value
///
/// Applies only to text values, in priority order: non-empty numeric
/// string, `"true"`, `"false"`, `"null"`, otherwise unchanged. Non-text
/// values pass through untouched.
fn coerce(value: FieldValue) -> FieldValue {
    let FieldValue::Text(s) = value else {
        return value;
    };
    if let Some(number) = parse_number(&s) {
        return FieldValue::Number(number);
    }
    match s.as_str() {
        "true" => FieldValue::Bool(true),
        "false" => FieldValue::Bool(false),
        "null" => FieldValue::Null,
        _ => FieldValue::Text(s),
    }
}

/// Parse a text value as a JSON-representable number
///
/// Integers are kept exact; anything else must parse as a finite f64.
/// NaN and infinities have no JSON form and stay text.
fn parse_number(s: &str) -> Option<serde_json::Number> {
    if s.is_empty() {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(serde_json::Number::from(i));
    }
    match s.parse::<f64>() {
        Ok(f) => serde_json::Number::from_f64(f),
        Err(_) => None,
    }
}
