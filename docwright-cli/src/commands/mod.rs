pub mod build;
pub mod data;
pub mod diff;
pub mod status;
pub mod wiki;

use std::path::PathBuf;

use clap::Args;

use docwright_renderer::{context::DEFAULT_PROJECT_NAME, SiteInfo};
use docwright_sync::BuildRequest;

/// Inputs shared by `build`, `diff` and `status`.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory holding issues.json, milestones.json and releases.json.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// YAML project config.
    #[arg(long, default_value = "src/main/resources/bootstrap.yml")]
    pub config: PathBuf,

    /// Output directory for the rendered docs.
    #[arg(long, default_value = "docs")]
    pub out: PathBuf,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl SourceArgs {
    pub fn request(&self) -> BuildRequest {
        let req = BuildRequest::new(&self.data_dir, &self.config, &self.out)
            .with_site(self.site.site_info());
        match &self.site.templates {
            Some(dir) => req.with_templates(dir),
            None => req,
        }
    }
}

/// Project identity and template overrides.
#[derive(Args, Debug, Clone)]
pub struct SiteArgs {
    /// Directory of .tera files overriding the built-in templates.
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Project name used in page prose.
    #[arg(long, default_value = DEFAULT_PROJECT_NAME)]
    pub project_name: String,

    /// Repository slug (owner/name) used in links.
    #[arg(long)]
    pub repository: Option<String>,
}

impl SiteArgs {
    pub fn site_info(&self) -> SiteInfo {
        let mut site = SiteInfo {
            project_name: self.project_name.clone(),
            ..SiteInfo::default()
        };
        if let Some(repository) = &self.repository {
            site.repository = repository.clone();
        }
        site
    }
}
