//! Error types for the configuration layer.
//!
//! The demonstrations themselves have no runtime failure paths: every
//! access-control violation they illustrate is rejected at compile time.
//! Errors can only arise while loading and interpreting configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TourError {
    #[error(
        "unknown section {0:?} (expected one of: visibility, statics, singleton, closures)"
    )]
    UnknownSection(String),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
