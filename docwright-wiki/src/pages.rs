//! Wiki page regeneration.

use std::path::Path;

use docwright_core::{data, ProjectData};
use docwright_renderer::{Renderer, SiteInfo};
use docwright_sync::{write_output, WriteResult};

use crate::error::WikiError;

/// Load the data directory and write the five wiki pages into `wiki_dir`.
pub fn render_wiki_pages(
    data_dir: &Path,
    wiki_dir: &Path,
    site: &SiteInfo,
    template_dir: Option<&Path>,
) -> Result<Vec<WriteResult>, WikiError> {
    let project = data::load_data(data_dir)?;
    write_wiki_pages(&project, wiki_dir, site, template_dir)
}

pub(crate) fn write_wiki_pages(
    project: &ProjectData,
    wiki_dir: &Path,
    site: &SiteInfo,
    template_dir: Option<&Path>,
) -> Result<Vec<WriteResult>, WikiError> {
    let renderer = Renderer::with_overrides(template_dir)?;
    let mut writes = Vec::new();
    for (path, content) in renderer.render_wiki(project, site, wiki_dir)? {
        writes.push(write_output(&path, &content, false)?);
    }
    Ok(writes)
}
