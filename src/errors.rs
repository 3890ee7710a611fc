// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Every variant is raised while loading. Lookups and mutations on a
//! constructed [`Config`](crate::Config) never fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("path {0:?} not found")]
    NotFound(PathBuf),

    #[error("file {0:?} is not a supported configuration format")]
    UnsupportedFormat(PathBuf),

    #[error("directory {0:?} contains no configuration units")]
    EmptySource(PathBuf),

    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("TOML parsing error in {path:?}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON parsing error in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
