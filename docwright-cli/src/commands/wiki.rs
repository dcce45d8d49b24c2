//! `docwright wiki`: render wiki pages locally or publish them.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use docwright_wiki::{
    config::{DEFAULT_API_BASE, DEFAULT_WORK_DIR},
    render_wiki_pages, GitCli, GitHubApi, PublishOutcome, Publisher, PublisherConfig,
};

use super::SiteArgs;

#[derive(Subcommand, Debug)]
pub enum WikiCommand {
    /// Write the five wiki pages into a local directory.
    Render(RenderArgs),

    /// Regenerate the repository wiki and push it.
    ///
    /// Reads GITHUB_TOKEN and GITHUB_REPOSITORY from the environment.
    Publish(PublishArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Target directory.
    pub dir: PathBuf,

    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    #[command(flatten)]
    pub site: SiteArgs,
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Scratch directory for the wiki clone; removed when the run ends.
    #[arg(long, default_value = DEFAULT_WORK_DIR)]
    pub work_dir: PathBuf,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Directory of .tera files overriding the built-in templates.
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Project name used on the wiki home page.
    #[arg(long)]
    pub project_name: Option<String>,

    /// Exit non-zero when a publish step fails. Missing credentials and
    /// malformed data files always do.
    #[arg(long)]
    pub strict: bool,
}

pub fn run(command: WikiCommand) -> Result<()> {
    match command {
        WikiCommand::Render(args) => render(args),
        WikiCommand::Publish(args) => publish(args),
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let writes = render_wiki_pages(
        &args.data_dir,
        &args.dir,
        &args.site.site_info(),
        args.site.templates.as_deref(),
    )
    .with_context(|| format!("wiki render failed for '{}'", args.dir.display()))?;

    println!("✓ wiki rendered to '{}'", args.dir.display());
    for w in writes {
        println!("  ✎  {}", w.path().display());
    }
    Ok(())
}

fn publish(args: PublishArgs) -> Result<()> {
    let mut config = PublisherConfig::from_env()
        .context("wiki publish is not configured")?
        .with_data_dir(&args.data_dir)
        .with_work_dir(&args.work_dir)
        .with_api_base(&args.api_base);
    if let Some(dir) = &args.templates {
        config = config.with_templates(dir);
    }
    if let Some(name) = &args.project_name {
        config = config.with_project_name(name);
    }

    let vcs = GitCli::new().redacting(&config.token);
    let api = GitHubApi::new(&config.api_base, &config.token);
    let publisher = Publisher::new(config, vcs, api);

    match publisher.run() {
        Ok(PublishOutcome::Pushed) => println!("Wiki updated successfully."),
        Ok(PublishOutcome::NoChanges) => println!("No changes to the wiki."),
        Err(err) if args.strict || err.is_fatal() => bail!("wiki publish failed: {err}"),
        Err(err) => tracing::error!("wiki publish failed: {err}"),
    }
    Ok(())
}
