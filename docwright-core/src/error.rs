//! Error types for docwright-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing or loading the JSON data directory.
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying I/O failure, annotated with the path involved.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON, or its top level is not an array.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file is a JSON array but one of its records has the wrong shape.
    #[error("invalid record #{index} in {path}: {source}")]
    Record {
        path: PathBuf,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a placeholder file failed.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while loading the YAML project config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file did not exist at the expected path.
    #[error("config not found at {path}")]
    NotFound { path: PathBuf },

    /// Underlying I/O failure other than not-found.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error; serde_yaml includes line context.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub(crate) fn data_io_err(path: impl Into<PathBuf>, source: std::io::Error) -> DataError {
    DataError::Io {
        path: path.into(),
        source,
    }
}
