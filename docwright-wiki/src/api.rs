//! Repository API capability and its GitHub REST implementation.

use std::time::Duration;

use serde::Deserialize;

use crate::config::RepoSlug;
use crate::error::WikiError;

/// Repository fields the publisher reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepoMetadata {
    #[serde(default)]
    pub has_wiki: Option<bool>,
}

impl RepoMetadata {
    /// Absent and `null` both mean the wiki is off.
    pub fn wiki_enabled(&self) -> bool {
        self.has_wiki.unwrap_or(false)
    }
}

/// Operations the publisher needs from the hosting service.
pub trait RepoApi {
    fn fetch_repository(&self, repo: &RepoSlug) -> Result<RepoMetadata, WikiError>;
    fn enable_wiki(&self, repo: &RepoSlug) -> Result<(), WikiError>;
}

impl<T: RepoApi + ?Sized> RepoApi for &T {
    fn fetch_repository(&self, repo: &RepoSlug) -> Result<RepoMetadata, WikiError> {
        (**self).fetch_repository(repo)
    }
    fn enable_wiki(&self, repo: &RepoSlug) -> Result<(), WikiError> {
        (**self).enable_wiki(repo)
    }
}

const USER_AGENT: &str = concat!("docwright/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";
const TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub REST client over `ureq`.
pub struct GitHubApi {
    agent: ureq::Agent,
    base: String,
    token: String,
}

impl GitHubApi {
    pub fn new(base: impl Into<String>, token: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build();
        GitHubApi {
            agent,
            base: base.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn repo_url(&self, repo: &RepoSlug) -> String {
        format!("{}/repos/{repo}", self.base)
    }

    fn authorize(&self, req: ureq::Request) -> ureq::Request {
        req.set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", ACCEPT)
    }
}

fn http_err(context: &str, err: ureq::Error) -> WikiError {
    match err {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            WikiError::Http {
                context: context.to_string(),
                status: Some(code),
                message: api_message(&body).unwrap_or_else(|| body.trim().to_string()),
            }
        }
        ureq::Error::Transport(transport) => WikiError::Http {
            context: context.to_string(),
            status: None,
            message: transport.to_string(),
        },
    }
}

/// The `message` field of a GitHub error body, when present.
fn api_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ApiError {
        message: String,
    }
    serde_json::from_str::<ApiError>(body).ok().map(|e| e.message)
}

impl RepoApi for GitHubApi {
    fn fetch_repository(&self, repo: &RepoSlug) -> Result<RepoMetadata, WikiError> {
        const CONTEXT: &str = "fetch repository";
        let response = self
            .authorize(self.agent.get(&self.repo_url(repo)))
            .call()
            .map_err(|e| http_err(CONTEXT, e))?;
        let body = response.into_string().map_err(|e| WikiError::Http {
            context: CONTEXT.to_string(),
            status: None,
            message: e.to_string(),
        })?;
        Ok(serde_json::from_str(&body)?)
    }

    fn enable_wiki(&self, repo: &RepoSlug) -> Result<(), WikiError> {
        self.authorize(self.agent.request("PATCH", &self.repo_url(repo)))
            .send_json(serde_json::json!({ "has_wiki": true }))
            .map_err(|e| http_err("enable wiki", e))?;
        Ok(())
    }
}
