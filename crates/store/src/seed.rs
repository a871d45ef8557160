//! Bundled starter catalogue.
//!
//! The catalogue ships inside the binary and is loaded once at startup. Every
//! entry goes through the same full validation as a `POST /movies` body, so a
//! bad edit to `data/movies.json` fails loudly instead of seeding a record
//! the API could never have created.

use reel_core::movie::Movie;
use reel_core::types::MovieId;
use reel_core::validation::{validate_movie, ValidationFailure};
use serde_json::Value;

const SEED_JSON: &str = include_str!("../data/movies.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seed data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed data must be a JSON array of movies")]
    NotAnArray,

    #[error("Seed entry {index} has no string id")]
    MissingId { index: usize },

    #[error("Seed entry {index} has an invalid id '{value}'")]
    InvalidId { index: usize, value: String },

    #[error("Seed entry {index} failed validation: {source}")]
    Invalid {
        index: usize,
        source: ValidationFailure,
    },

    #[error("Duplicate movie id {0}")]
    DuplicateId(MovieId),
}

/// Load the catalogue bundled with the crate.
pub fn load_seed() -> Result<Vec<Movie>, SeedError> {
    load_seed_from(SEED_JSON)
}

/// Parse and validate a seed catalogue from raw JSON.
pub fn load_seed_from(json: &str) -> Result<Vec<Movie>, SeedError> {
    let entries = match serde_json::from_str::<Value>(json)? {
        Value::Array(entries) => entries,
        _ => return Err(SeedError::NotAnArray),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let raw_id = entry
                .get("id")
                .and_then(Value::as_str)
                .ok_or(SeedError::MissingId { index })?;
            let id = MovieId::parse_str(raw_id).map_err(|_| SeedError::InvalidId {
                index,
                value: raw_id.to_string(),
            })?;
            let input = validate_movie(entry).map_err(|source| SeedError::Invalid { index, source })?;
            Ok(Movie::new(id, input))
        })
        .collect()
}
