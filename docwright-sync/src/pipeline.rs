//! Shared build inputs used by `build`, `diff` and `status`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use docwright_core::{config::load_config, data, ProjectData};
use docwright_renderer::{DocInput, DocPage, Renderer, SiteInfo};

use crate::error::{io_err, SyncError};

/// Where to read inputs from and where the docs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub out_dir: PathBuf,
    /// Optional directory of `.tera` overrides.
    pub template_dir: Option<PathBuf>,
    pub site: SiteInfo,
}

impl BuildRequest {
    pub fn new(
        data_dir: impl Into<PathBuf>,
        config_path: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        BuildRequest {
            data_dir: data_dir.into(),
            config_path: config_path.into(),
            out_dir: out_dir.into(),
            template_dir: None,
            site: SiteInfo::default(),
        }
    }

    pub fn with_templates(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    pub fn with_site(mut self, site: SiteInfo) -> Self {
        self.site = site;
        self
    }
}

/// One rendered doc page and where it belongs.
#[derive(Debug, Clone)]
pub(crate) struct RenderedPage {
    pub page: DocPage,
    pub path: PathBuf,
    pub content: String,
}

/// Load inputs and render every doc page.
///
/// `create_placeholders` controls whether missing data files are written as
/// `[]` first; read-only callers pass `false`.
pub(crate) fn render_pages(
    req: &BuildRequest,
    create_placeholders: bool,
) -> Result<Vec<RenderedPage>, SyncError> {
    let project: ProjectData = if create_placeholders {
        data::load_data(&req.data_dir)?
    } else {
        data::read_data(&req.data_dir)?
    };
    let config = load_config(&req.config_path)?;
    let renderer = Renderer::with_overrides(req.template_dir.as_deref())?;

    tracing::debug!(
        issues = project.issues.len(),
        milestones = project.milestones.len(),
        releases = project.releases.len(),
        "loaded project data from {}",
        req.data_dir.display()
    );

    let input = DocInput {
        site: &req.site,
        config: &config,
        releases: &project.releases,
    };
    let mut pages = Vec::with_capacity(DocPage::all().len());
    for page in DocPage::all() {
        let content = renderer.render_doc(*page, &input)?;
        pages.push(RenderedPage {
            page: *page,
            path: page.output_path(&req.out_dir),
            content: normalize_line_endings(&content),
        });
    }
    Ok(pages)
}

/// Current file content, or `None` when the file does not exist.
pub(crate) fn read_existing(path: &Path) -> Result<Option<String>, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(normalize_line_endings(&content))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

pub(crate) fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
