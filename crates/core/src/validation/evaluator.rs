//! Schema evaluator — pure logic over `serde_json` values.

use serde_json::{Map, Value};
use validator::ValidateUrl;

use super::rules::{FieldKind, FieldRule, FieldViolation, ValidationFailure, ValidationMode};

/// Evaluate a schema table against one JSON payload.
///
/// On success returns a normalized object holding only the fields named by
/// `rules`; unknown keys are dropped. Every violation is collected, in table
/// order, so the same payload always yields the same failure.
pub fn evaluate(
    rules: &[FieldRule],
    payload: &Value,
    mode: ValidationMode,
) -> Result<Map<String, Value>, ValidationFailure> {
    let Some(data) = payload.as_object() else {
        return Err(ValidationFailure::single("body", "expected a JSON object"));
    };

    let mut normalized = Map::new();
    let mut violations = Vec::new();

    for rule in rules {
        match data.get(rule.field) {
            None | Some(Value::Null) if mode == ValidationMode::Full => {
                violations.push(FieldViolation::new(rule.field, "is required", None));
            }
            None => {}
            Some(Value::Null) => {
                violations.push(FieldViolation::new(
                    rule.field,
                    "must not be null",
                    Some(&Value::Null),
                ));
            }
            Some(value) => match check_value(rule.kind, value) {
                Ok(clean) => {
                    normalized.insert(rule.field.to_string(), clean);
                }
                Err(message) => {
                    violations.push(FieldViolation::new(rule.field, message, Some(value)));
                }
            },
        }
    }

    if violations.is_empty() {
        Ok(normalized)
    } else {
        Err(ValidationFailure { violations })
    }
}

fn check_value(kind: FieldKind, value: &Value) -> Result<Value, String> {
    match kind {
        FieldKind::Text => check_text(value),
        FieldKind::Integer { min, max } => check_integer(value, min, max),
        FieldKind::Number { min, max } => check_number(value, min, max),
        FieldKind::Url => check_url(value),
        FieldKind::Choices { allowed } => check_choices(value, allowed),
    }
}

fn check_text(value: &Value) -> Result<Value, String> {
    let s = value.as_str().ok_or("must be a string")?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("must not be empty".into());
    }
    Ok(Value::String(trimmed.to_string()))
}

fn check_integer(value: &Value, min: i64, max: i64) -> Result<Value, String> {
    let n = value
        .as_i64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        })
        .ok_or("must be an integer")?;
    if n < min || n > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(Value::from(n))
}

fn check_number(value: &Value, min: f64, max: f64) -> Result<Value, String> {
    let n = value.as_f64().ok_or("must be a number")?;
    if n < min || n > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(value.clone())
}

fn check_url(value: &Value) -> Result<Value, String> {
    let s: &str = value.as_str().ok_or("must be a string")?.trim();
    if s.is_empty() || !s.validate_url() {
        return Err("must be a valid URL".into());
    }
    Ok(Value::String(s.to_string()))
}

fn check_choices(value: &Value, allowed: &[&'static str]) -> Result<Value, String> {
    let items = value.as_array().ok_or("must be an array of strings")?;
    if items.is_empty() {
        return Err("must contain at least one entry".into());
    }

    let mut canonical = Vec::with_capacity(items.len());
    for item in items {
        let s = item.as_str().ok_or("must be an array of strings")?.trim();
        let found = allowed
            .iter()
            .find(|name| name.eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("'{s}' is not one of: {}", allowed.join(", ")))?;
        canonical.push(Value::String((*found).to_string()));
    }
    Ok(Value::Array(canonical))
}
