use std::path::PathBuf;

use thiserror::Error;

/// Error surface for the wiki publisher.
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("environment variable {var} is not set")]
    MissingEnv { var: &'static str },

    #[error("invalid repository slug {slug:?}; expected owner/name")]
    InvalidRepository { slug: String },

    #[error("{context} failed{}: {message}", http_status(.status))]
    Http {
        context: String,
        status: Option<u16>,
        message: String,
    },

    #[error("command failed: {command} (status {}): {stderr}", exit_status(.status))]
    Command {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data error: {0}")]
    Data(#[from] docwright_core::DataError),

    #[error("render error: {0}")]
    Render(#[from] docwright_renderer::RenderError),

    #[error("write error: {0}")]
    Write(#[from] docwright_sync::SyncError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WikiError {
    /// Raised while validating the environment, before any step runs.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            WikiError::MissingEnv { .. } | WikiError::InvalidRepository { .. }
        )
    }

    /// A data file was missing or malformed.
    pub fn is_input(&self) -> bool {
        matches!(self, WikiError::Data(_))
    }

    /// Fails the command even without `--strict`.
    pub fn is_fatal(&self) -> bool {
        self.is_configuration() || self.is_input()
    }
}

fn http_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

fn exit_status(status: &Option<i32>) -> String {
    status.map_or_else(|| "signal".to_string(), |s| s.to_string())
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> WikiError {
    WikiError::Io {
        path: path.into(),
        source,
    }
}
