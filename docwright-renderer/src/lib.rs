//! # docwright-renderer
//!
//! Tera-based template engine that renders the static documentation pages
//! and the wiki pages from project data.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docwright_core::{ProjectConfig, ProjectData};
//! use docwright_renderer::{DocInput, Renderer, SiteInfo};
//! use std::path::Path;
//!
//! fn render_all(data: &ProjectData, config: &ProjectConfig) {
//!     let site = SiteInfo::default();
//!     if let Ok(renderer) = Renderer::new() {
//!         let input = DocInput { site: &site, config, releases: &data.releases };
//!         if let Ok(outputs) = renderer.render_docs(&input, Path::new("docs")) {
//!             for (path, content) in outputs {
//!                 println!("{}: {} bytes", path.display(), content.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod reference;

pub use context::{DocContext, SiteInfo, WikiContext};
pub use engine::{DocInput, DocPage, Renderer, TemplateEngine, WikiPage};
pub use error::RenderError;
