//! Payload validation engine.
//!
//! A schema is a declarative table of [`FieldRule`]s; [`evaluate`] applies a
//! table to a JSON payload in full or partial mode. `movie_schema` holds the
//! movie table and the typed entry points handlers call.

pub mod evaluator;
pub mod movie_schema;
pub mod rules;

pub use evaluator::evaluate;
pub use movie_schema::{validate_movie, validate_partial_movie, MOVIE_SCHEMA};
pub use rules::{FieldKind, FieldRule, FieldViolation, ValidationFailure, ValidationMode};
