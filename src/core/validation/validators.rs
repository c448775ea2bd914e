//! Reusable field validators
//!
//! A validator receives the field name and its JSON value (absent fields are
//! passed as `null`) and returns a human-readable message on failure.

use serde_json::Value;

/// Validator: field is required (present and not null)
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() {
            Err(format!("field '{}' is required", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: value is a string with at least one non-whitespace character
pub fn non_empty_string() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_str() {
        Some(s) if s.trim().is_empty() => Err(format!("field '{}' must not be empty", field)),
        Some(_) => Ok(()),
        None => Err(format!(
            "field '{}' must be a string (got {})",
            field,
            json_type(value)
        )),
    }
}

/// Validator: value is a JSON number
///
/// Numeric-looking strings such as `"25.00"` are rejected.
pub fn numeric() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_number() {
            Ok(())
        } else {
            Err(format!(
                "field '{}' must be a number (got {})",
                field,
                json_type(value)
            ))
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
