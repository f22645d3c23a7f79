//! Designer property values to YAIL literals.

use rhizome_yail_ir::{Expr, ValueKind, format_number};
use serde_json::Value;

/// Kind implied by the JSON value itself.
pub(crate) fn shape_kind(value: &Value) -> ValueKind {
    match value {
        Value::String(text) if text.starts_with("&H") => ValueKind::Number,
        Value::Number(_) => ValueKind::Number,
        Value::Bool(_) => ValueKind::Boolean,
        _ => ValueKind::Text,
    }
}

/// Literal for `value` coerced to `kind`.
pub(crate) fn property_value(value: &Value, kind: ValueKind) -> Expr {
    match kind {
        ValueKind::Number => number_literal(value),
        ValueKind::Boolean => Expr::boolean(truthy(value)),
        _ => Expr::string(text_of(value)),
    }
}

fn number_literal(value: &Value) -> Expr {
    match value {
        Value::String(text) => match text.strip_prefix("&H") {
            Some(hex) => Expr::atom(format!("#x{}", hex.to_ascii_uppercase())),
            None => Expr::number(parse_float_prefix(text).unwrap_or(0.0)),
        },
        Value::Number(number) => Expr::number(number.as_f64().unwrap_or(0.0)),
        Value::Bool(flag) => Expr::integer(i64::from(*flag)),
        _ => Expr::integer(0),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => matches!(text.to_ascii_lowercase().as_str(), "true" | "t" | "1"),
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number
            .as_f64()
            .map(format_number)
            .unwrap_or_else(|| number.to_string()),
        other => other.to_string(),
    }
}

/// The longest numeric prefix of `text`, read as a float.
///
/// `"12px"` reads as 12 and `"abc"` as `None`.
pub(crate) fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if text[end..].starts_with("Infinity") {
        return text[..end + "Infinity".len()].parse().ok();
    }

    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let whole = digits(end);
    end += whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(end + 1);
        if whole + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    text[..end].parse().ok()
}
