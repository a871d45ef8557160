//! The movie schema table and its typed entry points.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::evaluator::evaluate;
use super::rules::{FieldKind, FieldRule, ValidationFailure, ValidationMode};
use crate::movie::{CreateMovie, Genre, UpdateMovie};

pub const MIN_YEAR: i64 = 1900;
pub const MAX_YEAR: i64 = 2030;
pub const MAX_DURATION_MINUTES: i64 = 1000;
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// Field constraints for a movie payload, in report order.
pub const MOVIE_SCHEMA: &[FieldRule] = &[
    FieldRule::new("title", FieldKind::Text),
    FieldRule::new(
        "year",
        FieldKind::Integer {
            min: MIN_YEAR,
            max: MAX_YEAR,
        },
    ),
    FieldRule::new("director", FieldKind::Text),
    FieldRule::new(
        "duration",
        FieldKind::Integer {
            min: 1,
            max: MAX_DURATION_MINUTES,
        },
    ),
    FieldRule::new(
        "rating",
        FieldKind::Number {
            min: MIN_RATING,
            max: MAX_RATING,
        },
    ),
    FieldRule::new("poster", FieldKind::Url),
    FieldRule::new(
        "genre",
        FieldKind::Choices {
            allowed: &Genre::NAMES,
        },
    ),
];

/// Full validation, used on create. Every field must be present and valid.
pub fn validate_movie(payload: &Value) -> Result<CreateMovie, ValidationFailure> {
    let normalized = evaluate(MOVIE_SCHEMA, payload, ValidationMode::Full)?;
    into_typed(normalized)
}

/// Partial validation, used on update. Only present fields are checked.
///
/// An empty object yields an empty [`UpdateMovie`].
pub fn validate_partial_movie(payload: &Value) -> Result<UpdateMovie, ValidationFailure> {
    let normalized = evaluate(MOVIE_SCHEMA, payload, ValidationMode::Partial)?;
    into_typed(normalized)
}

fn into_typed<T: DeserializeOwned>(normalized: Map<String, Value>) -> Result<T, ValidationFailure> {
    // The table bounds every field inside the target types, so this only
    // fails if the table and the DTOs drift apart.
    serde_json::from_value(Value::Object(normalized))
        .map_err(|e| ValidationFailure::single("body", e.to_string()))
}
