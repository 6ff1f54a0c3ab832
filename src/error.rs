use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by [`crate::light::LightStore`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("light not found")]
    NotFound(String),
    #[error("light already exists with that ID")]
    DuplicateId(String),
    #[error("no valid fields in body")]
    InvalidUpdate,
}

/// Failures while loading the initial set of lights.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read lights file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid lights document")]
    Parse(#[from] serde_json::Error),
    #[error("lights document must be a JSON array or object, got {0}")]
    UnexpectedShape(&'static str),
    #[error("light at index {0} has no id")]
    MissingId(usize),
    #[error("light keyed {key:?} carries a different id {id:?}")]
    IdMismatch { key: String, id: String },
    #[error("duplicate light id {0:?}")]
    DuplicateId(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("brightness {0} is outside 0..=255")]
pub struct BrightnessOutOfRange(pub i64);
