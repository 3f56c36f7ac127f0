//! Error types
//!
//! Typed failures for loading, snapshotting and configuration. The binary
//! boundary wraps these in `anyhow`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrocerError {
    #[error("Error opening file: {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write snapshot {}: {source}", .path.display())]
    SnapshotWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Console I/O error: {0}")]
    Console(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GrocerError>;
