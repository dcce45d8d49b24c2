//! # docwright-sync
//!
//! Atomic writer and doc build orchestration.
//!
//! Call [`build_docs`] to render and write the six doc pages, [`diff_docs`]
//! to preview what a build would change, or [`page_status`] for a per-page
//! summary.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod status;
pub mod writer;

pub use diff::{diff_docs, FileDiff};
pub use error::SyncError;
pub use pipeline::BuildRequest;
pub use status::{page_status, PageState, PageStatus};
pub use writer::{build_docs, write_output, BuildReport, WriteResult};
