//! Validation rule and result types.

/// The constraint attached to one schema field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// A string that is not blank after trimming.
    Text,
    /// A JSON integer within `min..=max`.
    Integer { min: i64, max: i64 },
    /// Any JSON number within `min..=max`.
    Number { min: f64, max: f64 },
    /// A string that parses as an absolute URL.
    Url,
    /// A non-empty array of strings, each matching one of `allowed`
    /// case-insensitively.
    Choices { allowed: &'static [&'static str] },
}

/// One row of a declarative schema table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: FieldKind,
}

impl FieldRule {
    pub const fn new(field: &'static str, kind: FieldKind) -> Self {
        Self { field, kind }
    }
}

/// Whether absent fields are violations (`Full`) or skipped (`Partial`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Full,
    Partial,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
    /// The offending input, when there was one.
    pub value: Option<serde_json::Value>,
}

impl FieldViolation {
    pub fn new(field: &str, message: impl Into<String>, value: Option<&serde_json::Value>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            value: value.cloned(),
        }
    }
}

/// All violations found in one payload, in schema-table order.
///
/// Displays as `"<field>: <message>"` entries joined with `"; "`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", join_violations(.violations))]
pub struct ValidationFailure {
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation::new(field, message, None)],
        }
    }

    /// Names of the fields that failed, in report order.
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
