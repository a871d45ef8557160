//! Domain layer for the movie catalogue.
//!
//! Holds the record types, the shared error enum and the validation engine.
//! Nothing in this crate performs I/O, so every function here can be tested
//! without a runtime.

pub mod error;
pub mod movie;
pub mod types;
pub mod validation;
