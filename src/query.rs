//! Helpers for building id-list queries executed by a backend.

use serde_json::Value;
use std::collections::HashSet;

/// Parses a JSON array of ids into positive integers.
///
/// Anything that is not a JSON array yields an empty list. Elements are
/// coerced with [`coerce_int`]; non-positive results are dropped and
/// duplicates collapse onto their first occurrence.
pub fn parse_json_int_array(json: &str) -> Vec<u64> {
    match serde_json::from_str::<Value>(json) {
        Ok(value) => int_array_from_value(&value),
        Err(_) => Vec::new(),
    }
}

/// Same as [`parse_json_int_array`] for an already decoded value.
pub fn int_array_from_value(value: &Value) -> Vec<u64> {
    let Value::Array(items) = value else {
        return Vec::new();
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut ids = Vec::with_capacity(items.len());
    for item in items {
        let n = coerce_int(item);
        if n <= 0 {
            continue;
        }
        let id = n as u64;
        if seen.insert(id) {
            ids.push(id);
        }
    }
    ids
}

/// Integer coercion for loosely typed JSON values.
///
/// Numbers truncate toward zero, strings use their leading integer prefix
/// (`"12abc"` is 12, `"x"` is 0), `true` is 1 and everything else is 0.
pub fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => leading_int(s),
        Value::Bool(true) => 1,
        _ => 0,
    }
}

fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude = digits[..end].parse::<i64>().unwrap_or(if end == 0 { 0 } else { i64::MAX });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Comma-joined `?` placeholders, one per id, for an `IN (...)` clause.
///
/// An empty id list yields an empty string.
pub fn build_in_placeholders(ids: &[u64]) -> String {
    vec!["?"; ids.len()].join(",")
}

/// Numbered `$n` placeholders starting at `start`, for drivers that bind by
/// position (`$1,$2,$3`).
pub fn build_numbered_placeholders(ids: &[u64], start: usize) -> String {
    (0..ids.len())
        .map(|offset| format!("${}", start + offset))
        .collect::<Vec<_>>()
        .join(",")
}
