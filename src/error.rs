//! Error types for fleet construction and configuration.
//!
//! Business outcomes (unknown ids, no eligible candidate) are not errors;
//! they surface as `false`, `None`, or empty lists. Only building a fleet
//! from bad input or loading a bad config file fails.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while building an engine session.
#[derive(Debug, Error)]
pub enum FleetError {
    /// Input records failed validation.
    #[error("invalid fleet input: {} problem(s), first: {}", .0.len(), first_message(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Config file is not valid TOML for `EngineConfig`.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file could not be read.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("none")
}

/// Result type for fleet construction.
pub type FleetResult<T> = Result<T, FleetError>;
