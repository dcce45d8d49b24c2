//! Template contexts: serializable rendering payloads for doc and wiki pages.

use serde::{Deserialize, Serialize};

use docwright_core::{Issue, Milestone, ProjectData, Release};

use crate::engine::{DocInput, DocPage, WikiPage};
use crate::error::RenderError;
use crate::reference::{build_reference, ConfigSection};

pub const DEFAULT_PROJECT_NAME: &str = "Eterea Eureka Service";
pub const DEFAULT_REPOSITORY: &str = "eterea-project/eterea.eureka-service";

/// Project identity used in page prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub project_name: String,
    /// `owner/name` slug.
    pub repository: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
        }
    }
}

impl SiteInfo {
    /// Repository name without the owner (`eterea.eureka-service`).
    pub fn repo_name(&self) -> &str {
        self.repository
            .rsplit_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.repository)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteCtx {
    pub project_name: String,
    pub repository: String,
    pub repo_name: String,
}

impl From<&SiteInfo> for SiteCtx {
    fn from(site: &SiteInfo) -> Self {
        Self {
            project_name: site.project_name.clone(),
            repository: site.repository.clone(),
            repo_name: site.repo_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReleaseCtx {
    pub display_name: String,
    pub tag_name: String,
    pub published_at: String,
    pub body: Option<String>,
}

impl From<&Release> for ReleaseCtx {
    fn from(r: &Release) -> Self {
        Self {
            display_name: r.display_name().to_string(),
            tag_name: r.tag_name.clone(),
            published_at: r.published_at.clone(),
            body: r.body.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueCtx {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub created_at: String,
    pub closed_at: Option<String>,
    pub milestone: Option<String>,
    pub labels: Vec<String>,
    pub body: Option<String>,
}

impl From<&Issue> for IssueCtx {
    fn from(i: &Issue) -> Self {
        Self {
            number: i.number.0,
            title: i.title.clone(),
            state: i.state.to_string(),
            created_at: i.created_at.clone(),
            closed_at: i.closed_at.clone(),
            milestone: i.milestone.clone(),
            labels: i.labels.clone(),
            body: i.body.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MilestoneCtx {
    pub title: String,
    pub state: String,
    pub due_on: Option<String>,
    pub description: Option<String>,
}

impl From<&Milestone> for MilestoneCtx {
    fn from(m: &Milestone) -> Self {
        Self {
            title: m.title.clone(),
            state: m.state.to_string(),
            due_on: m.due_on.clone(),
            description: m.description.clone(),
        }
    }
}

/// Payload for one doc page.
///
/// `config` and `config_reference` are only filled for the configuration
/// page, `releases` only for the changelog.
#[derive(Debug, Clone, Serialize)]
pub struct DocContext {
    pub title: String,
    pub description: String,
    pub nav_order: u8,
    pub parent: Option<String>,
    pub site: SiteCtx,
    pub config: serde_json::Value,
    pub config_reference: Vec<ConfigSection>,
    pub releases: Vec<ReleaseCtx>,
}

impl DocContext {
    pub fn for_page(page: DocPage, input: &DocInput<'_>) -> Result<Self, RenderError> {
        let (config, config_reference) = if page == DocPage::Configuration {
            (input.config.to_json(), build_reference(input.config)?)
        } else {
            (serde_json::Value::Null, Vec::new())
        };
        let releases = if page == DocPage::Changelog {
            input.releases.iter().map(ReleaseCtx::from).collect()
        } else {
            Vec::new()
        };

        Ok(DocContext {
            title: page.title(input.site),
            description: page.description(input.site),
            nav_order: page.nav_order(),
            parent: page.parent().map(str::to_string),
            site: SiteCtx::from(input.site),
            config,
            config_reference,
            releases,
        })
    }
}

/// Payload for one wiki page; collections not shown on the page stay empty.
#[derive(Debug, Clone, Serialize)]
pub struct WikiContext {
    pub site: SiteCtx,
    pub milestones: Vec<MilestoneCtx>,
    pub issues: Vec<IssueCtx>,
    pub releases: Vec<ReleaseCtx>,
}

impl WikiContext {
    pub fn for_page(page: WikiPage, data: &ProjectData, site: &SiteInfo) -> Self {
        let mut ctx = WikiContext {
            site: SiteCtx::from(site),
            milestones: Vec::new(),
            issues: Vec::new(),
            releases: Vec::new(),
        };
        match page {
            WikiPage::Home => {}
            WikiPage::Milestones => {
                ctx.milestones = data.milestones.iter().map(MilestoneCtx::from).collect();
            }
            WikiPage::ActiveIssues => {
                ctx.issues = data.open_issues().into_iter().map(IssueCtx::from).collect();
            }
            WikiPage::ClosedIssues => {
                ctx.issues = data.closed_issues().into_iter().map(IssueCtx::from).collect();
            }
            WikiPage::Releases => {
                ctx.releases = data.releases.iter().map(ReleaseCtx::from).collect();
            }
        }
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docwright_core::{IssueNumber, State};

    fn issue(number: u64, state: State) -> Issue {
        Issue {
            number: IssueNumber(number),
            title: format!("issue {number}"),
            state,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            closed_at: None,
            milestone: None,
            labels: vec![],
            body: None,
        }
    }

    #[test]
    fn repo_name_strips_owner() {
        let site = SiteInfo::default();
        assert_eq!(site.repo_name(), "eterea.eureka-service");
        let bare = SiteInfo {
            project_name: "x".into(),
            repository: "solo".into(),
        };
        assert_eq!(bare.repo_name(), "solo");
    }

    #[test]
    fn wiki_context_partitions_issues_by_page() {
        let data = ProjectData {
            issues: vec![issue(1, State::Open), issue(2, State::Closed)],
            ..ProjectData::default()
        };
        let site = SiteInfo::default();
        let active = WikiContext::for_page(WikiPage::ActiveIssues, &data, &site);
        let closed = WikiContext::for_page(WikiPage::ClosedIssues, &data, &site);
        let home = WikiContext::for_page(WikiPage::Home, &data, &site);
        assert_eq!(active.issues.len(), 1);
        assert_eq!(active.issues[0].number, 1);
        assert_eq!(closed.issues[0].number, 2);
        assert!(home.issues.is_empty());
    }

    #[test]
    fn only_changelog_receives_releases() {
        let site = SiteInfo::default();
        let cfg = docwright_core::ProjectConfig::default();
        let releases = vec![Release {
            name: None,
            tag_name: "v1.0".into(),
            published_at: "2024-01-15T00:00:00Z".into(),
            body: None,
        }];
        let input = DocInput { site: &site, config: &cfg, releases: &releases };
        let changelog = DocContext::for_page(DocPage::Changelog, &input).unwrap();
        let index = DocContext::for_page(DocPage::Index, &input).unwrap();
        assert_eq!(changelog.releases.len(), 1);
        assert_eq!(changelog.releases[0].tag_name, "v1.0");
        assert!(index.releases.is_empty());
        assert!(index.config.is_null());
    }
}
