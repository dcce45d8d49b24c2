//! Wiki publish run.
//!
//! Steps run in order and the first failure aborts the rest:
//!
//! 1. **Discover**: fetch repository metadata.
//! 2. **Enable**: turn the wiki on when it is off.
//! 3. **Clone**: clear any stale working copy and clone the wiki fresh.
//! 4. **Regenerate**: overwrite the five wiki pages.
//! 5. **Publish**: stage everything; commit and push only if something changed.
//!
//! The data files are read before step 1, so malformed input fails the run
//! before anything remote changes. The working copy is removed when the run
//! ends, whatever the outcome.

use std::fmt;

use docwright_core::data;

use crate::api::RepoApi;
use crate::config::PublisherConfig;
use crate::error::WikiError;
use crate::pages::write_wiki_pages;
use crate::vcs::Vcs;
use crate::workdir::WorkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Discover,
    Enable,
    Clone,
    Regenerate,
    Publish,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Discover => "discover",
            Step::Enable => "enable",
            Step::Clone => "clone",
            Step::Regenerate => "regenerate",
            Step::Publish => "publish",
        };
        f.write_str(name)
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Pushed,
    NoChanges,
}

pub struct Publisher<V, A> {
    config: PublisherConfig,
    vcs: V,
    api: A,
}

impl<V: Vcs, A: RepoApi> Publisher<V, A> {
    pub fn new(config: PublisherConfig, vcs: V, api: A) -> Self {
        Publisher { config, vcs, api }
    }

    pub fn run(&self) -> Result<PublishOutcome, WikiError> {
        let cfg = &self.config;
        let workdir = WorkDir::new(&cfg.work_dir);
        let project = data::load_data(&cfg.data_dir)?;

        step(Step::Discover);
        let metadata = self.api.fetch_repository(&cfg.repository)?;

        if metadata.wiki_enabled() {
            tracing::debug!("wiki already enabled for {}", cfg.repository);
        } else {
            step(Step::Enable);
            self.api.enable_wiki(&cfg.repository)?;
        }

        step(Step::Clone);
        workdir.clear()?;
        self.vcs.clone_repo(&cfg.wiki_clone_url(), workdir.path())?;

        step(Step::Regenerate);
        write_wiki_pages(
            &project,
            workdir.path(),
            &cfg.site,
            cfg.template_dir.as_deref(),
        )?;

        step(Step::Publish);
        let repo = workdir.path();
        self.vcs.set_identity(repo, &cfg.identity)?;
        self.vcs.stage_all(repo)?;
        if !self.vcs.has_pending_changes(repo)? {
            tracing::info!("no changes to the wiki");
            return Ok(PublishOutcome::NoChanges);
        }
        self.vcs.commit(repo, &cfg.commit_message)?;
        self.vcs.push(repo)?;
        tracing::info!("wiki updated for {}", cfg.repository);
        Ok(PublishOutcome::Pushed)
    }
}

fn step(step: Step) {
    tracing::info!(%step, "wiki publish step");
}
