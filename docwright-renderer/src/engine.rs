//! Tera rendering engine: [`DocPage`] / [`WikiPage`] enums and [`Renderer`].
//!
//! # Path mapping
//!
//! | Page                     | Output file               |
//! |--------------------------|---------------------------|
//! | `DocPage::Index`         | `<out>/index.md`          |
//! | `DocPage::GettingStarted`| `<out>/getting-started.md`|
//! | `DocPage::Configuration` | `<out>/configuration.md`  |
//! | `DocPage::Monitoring`    | `<out>/monitoring.md`     |
//! | `DocPage::Contributing`  | `<out>/contributing.md`   |
//! | `DocPage::Changelog`     | `<out>/changelog.md`      |
//! | `WikiPage::Home`         | `<wiki>/Home.md`          |
//! | `WikiPage::Milestones`   | `<wiki>/Project-Milestones.md` |
//! | `WikiPage::ActiveIssues` | `<wiki>/Active-Issues.md` |
//! | `WikiPage::ClosedIssues` | `<wiki>/Closed-Issues.md` |
//! | `WikiPage::Releases`     | `<wiki>/Releases.md`      |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::{Tera, Value};

use docwright_core::{types::date_prefix, ProjectConfig, ProjectData, Release};

use crate::context::{DocContext, SiteInfo, WikiContext};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates: baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    (
        "shared/_front_matter.tera",
        include_str!("templates/_partials/front_matter.tera"),
    ),
    ("shared/_issue.tera", include_str!("templates/_partials/issue.tera")),
    ("docs/index.md.tera", include_str!("templates/docs/index.md.tera")),
    (
        "docs/getting-started.md.tera",
        include_str!("templates/docs/getting-started.md.tera"),
    ),
    (
        "docs/configuration.md.tera",
        include_str!("templates/docs/configuration.md.tera"),
    ),
    (
        "docs/monitoring.md.tera",
        include_str!("templates/docs/monitoring.md.tera"),
    ),
    (
        "docs/contributing.md.tera",
        include_str!("templates/docs/contributing.md.tera"),
    ),
    (
        "docs/changelog.md.tera",
        include_str!("templates/docs/changelog.md.tera"),
    ),
    ("wiki/home.md.tera", include_str!("templates/wiki/home.md.tera")),
    (
        "wiki/milestones.md.tera",
        include_str!("templates/wiki/milestones.md.tera"),
    ),
    (
        "wiki/active-issues.md.tera",
        include_str!("templates/wiki/active-issues.md.tera"),
    ),
    (
        "wiki/closed-issues.md.tera",
        include_str!("templates/wiki/closed-issues.md.tera"),
    ),
    (
        "wiki/releases.md.tera",
        include_str!("templates/wiki/releases.md.tera"),
    ),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    files.sort();
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

/// `{{ ts | iso_date }}`: date-only prefix of an ISO-8601 timestamp.
fn iso_date(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    match value {
        Value::String(s) => Ok(Value::String(date_prefix(s).to_string())),
        Value::Null => Ok(Value::String(String::new())),
        other => Err(tera::Error::msg(format!(
            "iso_date expects a string, got {other}"
        ))),
    }
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    tera.register_filter("iso_date", iso_date);
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// DocPage
// ---------------------------------------------------------------------------

/// The six static documentation pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocPage {
    Index,
    GettingStarted,
    Configuration,
    Monitoring,
    Contributing,
    Changelog,
}

impl DocPage {
    /// All pages in navigation order.
    pub fn all() -> &'static [DocPage] {
        &[
            DocPage::Index,
            DocPage::GettingStarted,
            DocPage::Configuration,
            DocPage::Monitoring,
            DocPage::Contributing,
            DocPage::Changelog,
        ]
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            DocPage::Index          => "docs/index.md.tera",
            DocPage::GettingStarted => "docs/getting-started.md.tera",
            DocPage::Configuration  => "docs/configuration.md.tera",
            DocPage::Monitoring     => "docs/monitoring.md.tera",
            DocPage::Contributing   => "docs/contributing.md.tera",
            DocPage::Changelog      => "docs/changelog.md.tera",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            DocPage::Index          => "index.md",
            DocPage::GettingStarted => "getting-started.md",
            DocPage::Configuration  => "configuration.md",
            DocPage::Monitoring     => "monitoring.md",
            DocPage::Contributing   => "contributing.md",
            DocPage::Changelog      => "changelog.md",
        }
    }

    /// Output path for this page, relative to the docs output directory.
    pub fn output_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(self.file_name())
    }

    /// `title` front matter and heading. The index title embeds the project name.
    pub fn title(&self, site: &SiteInfo) -> String {
        match self {
            DocPage::Index          => format!("Welcome to {}", site.project_name),
            DocPage::GettingStarted => "Getting Started".to_string(),
            DocPage::Configuration  => "Configuration Guide".to_string(),
            DocPage::Monitoring     => "Monitoring and Management".to_string(),
            DocPage::Contributing   => "Contributing".to_string(),
            DocPage::Changelog      => "Changelog".to_string(),
        }
    }

    pub fn description(&self, site: &SiteInfo) -> String {
        match self {
            DocPage::Index => format!(
                "This is the main documentation for the {}. Here you will find all the \
                 necessary information to understand, use, and contribute to the project.",
                site.project_name
            ),
            DocPage::GettingStarted => format!(
                "This guide will walk you through the process of setting up the {} in your \
                 local environment for development and testing purposes.",
                site.project_name
            ),
            DocPage::Configuration => {
                "This section details the configuration options available for the Eureka service."
                    .to_string()
            }
            DocPage::Monitoring => {
                "The service exposes several endpoints for monitoring and management via \
                 Spring Boot Actuator."
                    .to_string()
            }
            DocPage::Contributing => {
                "We welcome contributions from the community. Please follow these guidelines \
                 to ensure a smooth and effective collaboration process."
                    .to_string()
            }
            DocPage::Changelog => String::new(),
        }
    }

    pub fn nav_order(&self) -> u8 {
        match self {
            DocPage::Index          => 1,
            DocPage::GettingStarted => 2,
            DocPage::Configuration  => 3,
            DocPage::Monitoring     => 4,
            DocPage::Contributing   => 5,
            DocPage::Changelog      => 6,
        }
    }

    /// Navigation parent, for pages nested under the user guide.
    pub fn parent(&self) -> Option<&'static str> {
        match self {
            DocPage::GettingStarted | DocPage::Configuration | DocPage::Monitoring => {
                Some("User Guide")
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// WikiPage
// ---------------------------------------------------------------------------

/// The five wiki pages regenerated on every publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WikiPage {
    Home,
    Milestones,
    ActiveIssues,
    ClosedIssues,
    Releases,
}

impl WikiPage {
    pub fn all() -> &'static [WikiPage] {
        &[
            WikiPage::Home,
            WikiPage::Milestones,
            WikiPage::ActiveIssues,
            WikiPage::ClosedIssues,
            WikiPage::Releases,
        ]
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            WikiPage::Home         => "wiki/home.md.tera",
            WikiPage::Milestones   => "wiki/milestones.md.tera",
            WikiPage::ActiveIssues => "wiki/active-issues.md.tera",
            WikiPage::ClosedIssues => "wiki/closed-issues.md.tera",
            WikiPage::Releases     => "wiki/releases.md.tera",
        }
    }

    /// Wiki file name; GitHub derives the page title from it.
    pub fn file_name(&self) -> &'static str {
        match self {
            WikiPage::Home         => "Home.md",
            WikiPage::Milestones   => "Project-Milestones.md",
            WikiPage::ActiveIssues => "Active-Issues.md",
            WikiPage::ClosedIssues => "Closed-Issues.md",
            WikiPage::Releases     => "Releases.md",
        }
    }

    pub fn output_path(&self, wiki_dir: &Path) -> PathBuf {
        wiki_dir.join(self.file_name())
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering templates with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults, addressed by the same relative names (`docs/index.md.tera`,
/// `shared/_issue.tera`, ...). Names are normalised to lowercase.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render one template by name against a serializable context.
    pub fn render<C: serde::Serialize>(&self, name: &str, ctx: &C) -> Result<String, RenderError> {
        let tera_ctx = tera::Context::from_serialize(ctx)?;
        let content = self.tera.render(name, &tera_ctx)?;
        Ok(content.replace("\r\n", "\n"))
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Inputs shared by every doc page.
#[derive(Debug, Clone, Copy)]
pub struct DocInput<'a> {
    pub site: &'a SiteInfo,
    pub config: &'a ProjectConfig,
    pub releases: &'a [Release],
}

/// Renderer for doc and wiki pages. Create once and reuse.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates only.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_overrides(None)
    }

    /// Construct a [`Renderer`] whose embedded templates may be overridden
    /// from `user_template_dir`.
    pub fn with_overrides(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(user_template_dir)? })
    }

    /// Render a single doc page.
    pub fn render_doc(&self, page: DocPage, input: &DocInput<'_>) -> Result<String, RenderError> {
        let ctx = DocContext::for_page(page, input)?;
        self.engine.render(page.template_name(), &ctx)
    }

    /// Render all six doc pages.
    ///
    /// Returns `Vec<(output_path, rendered_content)>` in navigation order.
    pub fn render_docs(
        &self,
        input: &DocInput<'_>,
        out_dir: &Path,
    ) -> Result<Vec<(PathBuf, String)>, RenderError> {
        let mut results = Vec::with_capacity(DocPage::all().len());
        for page in DocPage::all() {
            let content = self.render_doc(*page, input)?;
            results.push((page.output_path(out_dir), content));
        }
        Ok(results)
    }

    /// Render a single wiki page.
    pub fn render_wiki_page(
        &self,
        page: WikiPage,
        data: &ProjectData,
        site: &SiteInfo,
    ) -> Result<String, RenderError> {
        let ctx = WikiContext::for_page(page, data, site);
        self.engine.render(page.template_name(), &ctx)
    }

    /// Render all five wiki pages.
    pub fn render_wiki(
        &self,
        data: &ProjectData,
        site: &SiteInfo,
        wiki_dir: &Path,
    ) -> Result<Vec<(PathBuf, String)>, RenderError> {
        let mut results = Vec::with_capacity(WikiPage::all().len());
        for page in WikiPage::all() {
            let content = self.render_wiki_page(*page, data, site)?;
            results.push((page.output_path(wiki_dir), content));
        }
        Ok(results)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
