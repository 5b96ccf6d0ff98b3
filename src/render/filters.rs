//! Filters and functions registered on every template.

use super::permission::transform_permission_mode;
use crate::document::tools::merge_tools;
use std::collections::HashMap;
use tera::{Error, Result, Tera, Value};

pub(super) fn register(tera: &mut Tera) {
    tera.register_filter("yaml_scalar", yaml_scalar_filter);
    tera.register_filter("yaml_number", yaml_number_filter);
    tera.register_filter("trim_leading_newlines", trim_leading_newlines_filter);
    tera.register_function("transform_permission_mode", permission_function);
    tera.register_function("merge_tools", merge_tools_function);
}

/// Render `value` as a YAML scalar that reads back as the same string.
pub fn yaml_scalar(value: &str) -> String {
    if needs_quotes(value) {
        // A JSON string literal is a valid double-quoted YAML scalar.
        serde_json::to_string(value).unwrap_or_else(|_| format!("\"{value}\""))
    } else {
        value.to_string()
    }
}

fn needs_quotes(value: &str) -> bool {
    const INDICATORS: &[char] = &[
        '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%',
        '@', '`',
    ];

    if value.is_empty() || value.trim() != value {
        return true;
    }
    if value.contains(['\n', '\r', '\t']) || value.starts_with(INDICATORS) {
        return true;
    }
    !matches!(
        serde_yaml::from_str::<serde_yaml::Value>(value),
        Ok(serde_yaml::Value::String(ref parsed)) if parsed == value
    )
}

/// Format a number, dropping the fractional part of integral floats.
pub fn yaml_number(value: &serde_json::Number) -> String {
    match value.as_f64() {
        Some(f) if value.is_f64() && f.is_finite() && f.fract() == 0.0 => {
            format!("{}", f as i64)
        }
        _ => value.to_string(),
    }
}

/// Drop leading whitespace-only lines. A body that is entirely blank becomes
/// empty.
pub fn trim_leading_newlines(value: &str) -> &str {
    let mut rest = value;
    while let Some(idx) = rest.find('\n') {
        if !rest[..idx].trim().is_empty() {
            break;
        }
        rest = &rest[idx + 1..];
    }
    if rest.trim().is_empty() {
        ""
    } else {
        rest
    }
}

fn yaml_scalar_filter(value: &Value, _: &HashMap<String, Value>) -> Result<Value> {
    match value {
        Value::String(s) => Ok(Value::String(yaml_scalar(s))),
        Value::Null => Ok(Value::String(yaml_scalar(""))),
        Value::Bool(_) | Value::Number(_) => Ok(Value::String(value.to_string())),
        _ => Err(Error::msg("yaml_scalar expects a scalar value")),
    }
}

fn yaml_number_filter(value: &Value, _: &HashMap<String, Value>) -> Result<Value> {
    match value {
        Value::Number(n) => Ok(Value::String(yaml_number(n))),
        _ => Err(Error::msg("yaml_number expects a number")),
    }
}

fn trim_leading_newlines_filter(value: &Value, _: &HashMap<String, Value>) -> Result<Value> {
    match value {
        Value::String(s) => Ok(Value::String(trim_leading_newlines(s).to_string())),
        _ => Err(Error::msg("trim_leading_newlines expects a string")),
    }
}

fn permission_function(args: &HashMap<String, Value>) -> Result<Value> {
    let mode = args.get("mode").and_then(Value::as_str).unwrap_or_default();
    match transform_permission_mode(mode) {
        Some(policy) => Ok(serde_json::to_value(policy)?),
        None => Ok(Value::Null),
    }
}

fn merge_tools_function(args: &HashMap<String, Value>) -> Result<Value> {
    let allowed = string_list(args, "allowed")?;
    let disallowed = string_list(args, "disallowed")?;
    Ok(serde_json::to_value(merge_tools(&allowed, &disallowed))?)
}

fn string_list(args: &HashMap<String, Value>, key: &str) -> Result<Vec<String>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| Error::msg(format!("merge_tools: `{key}` must be a list of strings: {e}"))),
    }
}
