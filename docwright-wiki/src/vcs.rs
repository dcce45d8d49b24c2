//! Version-control capability and its `git` CLI implementation.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Identity;
use crate::error::{io_err, WikiError};

/// Operations the publisher needs from version control.
pub trait Vcs {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), WikiError>;
    fn set_identity(&self, repo: &Path, identity: &Identity) -> Result<(), WikiError>;
    fn stage_all(&self, repo: &Path) -> Result<(), WikiError>;
    /// Whether the porcelain status of `repo` lists anything.
    fn has_pending_changes(&self, repo: &Path) -> Result<bool, WikiError>;
    fn commit(&self, repo: &Path, message: &str) -> Result<(), WikiError>;
    fn push(&self, repo: &Path) -> Result<(), WikiError>;
}

impl<T: Vcs + ?Sized> Vcs for &T {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), WikiError> {
        (**self).clone_repo(url, dest)
    }
    fn set_identity(&self, repo: &Path, identity: &Identity) -> Result<(), WikiError> {
        (**self).set_identity(repo, identity)
    }
    fn stage_all(&self, repo: &Path) -> Result<(), WikiError> {
        (**self).stage_all(repo)
    }
    fn has_pending_changes(&self, repo: &Path) -> Result<bool, WikiError> {
        (**self).has_pending_changes(repo)
    }
    fn commit(&self, repo: &Path, message: &str) -> Result<(), WikiError> {
        (**self).commit(repo, message)
    }
    fn push(&self, repo: &Path) -> Result<(), WikiError> {
        (**self).push(repo)
    }
}

const REDACTED: &str = "***";

/// Runs the `git` binary.
///
/// Any configured secret is masked in command lines and captured stderr
/// before they reach a log line or an error.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    secrets: Vec<String>,
}

impl Default for GitCli {
    fn default() -> Self {
        GitCli {
            program: PathBuf::from("git"),
            secrets: Vec::new(),
        }
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific `git` executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Mask `secret` in everything this runner reports.
    pub fn redacting(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        if !secret.is_empty() {
            self.secrets.push(secret);
        }
        self
    }

    fn redact(&self, text: &str) -> String {
        self.secrets
            .iter()
            .fold(text.to_string(), |acc, secret| acc.replace(secret.as_str(), REDACTED))
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<String, WikiError> {
        let command_line = self.redact(&format!(
            "{} {}",
            self.program.display(),
            args.join(" ")
        ));
        tracing::debug!("running: {command_line}");

        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let output = cmd.output().map_err(|e| io_err(&self.program, e))?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(WikiError::Command {
            command: command_line,
            status: output.status.code(),
            stderr: self.redact(&stderr),
        })
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl Vcs for GitCli {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), WikiError> {
        let dest = path_arg(dest);
        self.run(&["clone", url, &dest], None).map(|_| ())
    }

    fn set_identity(&self, repo: &Path, identity: &Identity) -> Result<(), WikiError> {
        self.run(&["config", "user.name", &identity.name], Some(repo))?;
        self.run(&["config", "user.email", &identity.email], Some(repo))?;
        Ok(())
    }

    fn stage_all(&self, repo: &Path) -> Result<(), WikiError> {
        self.run(&["add", "."], Some(repo)).map(|_| ())
    }

    fn has_pending_changes(&self, repo: &Path) -> Result<bool, WikiError> {
        let status = self.run(&["status", "--porcelain"], Some(repo))?;
        Ok(!status.trim().is_empty())
    }

    fn commit(&self, repo: &Path, message: &str) -> Result<(), WikiError> {
        self.run(&["commit", "-m", message], Some(repo)).map(|_| ())
    }

    fn push(&self, repo: &Path) -> Result<(), WikiError> {
        self.run(&["push"], Some(repo)).map(|_| ())
    }
}
