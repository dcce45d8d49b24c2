//! docwright core library: record types, data and config loaders, errors.
//!
//! Public API surface:
//! - [`types`]: issue / milestone / release records
//! - [`data`]: JSON data directory loader
//! - [`config`]: YAML project config loader
//! - [`error`]: [`DataError`], [`ConfigError`]

pub mod config;
pub mod data;
pub mod error;
pub mod types;

pub use config::ProjectConfig;
pub use data::ProjectData;
pub use error::{ConfigError, DataError};
pub use types::{Issue, IssueNumber, Milestone, Release, State};
