//! Error types for cranialign

use thiserror::Error;

/// Main error type for cranialign operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("landmark \"{name}\" is not in the configured name table")]
    MissingLandmark { name: String },

    #[error(
        "landmark \"{name}\" is at table index {index} but only {placed} control points are placed"
    )]
    InsufficientPlacedPoints {
        name: String,
        index: usize,
        placed: usize,
    },
}

/// Result type alias for cranialign operations
pub type Result<T> = std::result::Result<T, Error>;
