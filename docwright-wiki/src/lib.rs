//! Wiki publisher: regenerate wiki pages and push them to the repository wiki.
//!
//! Version control and the hosting API sit behind the [`Vcs`] and [`RepoApi`]
//! traits; [`GitCli`] and [`GitHubApi`] are the production implementations.

pub mod api;
pub mod config;
mod error;
pub mod pages;
pub mod publisher;
pub mod vcs;
pub mod workdir;

pub use api::{GitHubApi, RepoApi, RepoMetadata};
pub use config::{Identity, PublisherConfig, RepoSlug};
pub use error::WikiError;
pub use pages::render_wiki_pages;
pub use publisher::{PublishOutcome, Publisher, Step};
pub use vcs::{GitCli, Vcs};
pub use workdir::WorkDir;
