//! Data directory loader.
//!
//! # Layout
//!
//! ```text
//! <data_dir>/
//!   issues.json       ([] placeholder created when missing)
//!   milestones.json
//!   releases.json
//! ```
//!
//! Files are produced upstream and never rewritten here once they exist.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{data_io_err, DataError};
use crate::types::{Issue, Milestone, Release, State};

pub const ISSUES_FILE: &str = "issues.json";
pub const MILESTONES_FILE: &str = "milestones.json";
pub const RELEASES_FILE: &str = "releases.json";

/// The three data files, in load order.
pub const DATA_FILES: [&str; 3] = [ISSUES_FILE, MILESTONES_FILE, RELEASES_FILE];

/// Immutable snapshot of the three collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectData {
    pub issues: Vec<Issue>,
    pub milestones: Vec<Milestone>,
    pub releases: Vec<Release>,
}

/// Record counts, used by `docwright status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataSummary {
    pub open_issues: usize,
    pub closed_issues: usize,
    pub open_milestones: usize,
    pub closed_milestones: usize,
    pub releases: usize,
    pub latest_release: Option<String>,
}

impl ProjectData {
    /// Open issues in input order.
    pub fn open_issues(&self) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.state == State::Open).collect()
    }

    /// Closed issues in input order.
    pub fn closed_issues(&self) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| i.state == State::Closed)
            .collect()
    }

    pub fn summary(&self) -> DataSummary {
        let open_milestones = self
            .milestones
            .iter()
            .filter(|m| m.state == State::Open)
            .count();

        // Newest by parsed timestamp; unparseable timestamps never win.
        let latest_release = self
            .releases
            .iter()
            .filter_map(|r| r.published_at_utc().map(|at| (at, r)))
            .max_by_key(|(at, _)| *at)
            .map(|(_, r)| r.tag_name.clone());

        DataSummary {
            open_issues: self.open_issues().len(),
            closed_issues: self.closed_issues().len(),
            open_milestones,
            closed_milestones: self.milestones.len() - open_milestones,
            releases: self.releases.len(),
            latest_release,
        }
    }
}

/// Create `dir` and an empty-array placeholder for each missing data file.
///
/// Returns the paths that were created; an already-complete directory
/// returns an empty list.
pub fn ensure_data_files(dir: &Path) -> Result<Vec<PathBuf>, DataError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| data_io_err(dir, e))?;
    }

    let placeholder = serde_json::to_string(&Vec::<()>::new())?;
    let mut created = Vec::new();
    for name in DATA_FILES {
        let path = dir.join(name);
        if path.exists() {
            continue;
        }
        std::fs::write(&path, &placeholder).map_err(|e| data_io_err(&path, e))?;
        created.push(path);
    }
    Ok(created)
}

/// Ensure placeholders exist, then parse all three collections.
pub fn load_data(dir: &Path) -> Result<ProjectData, DataError> {
    ensure_data_files(dir)?;
    read_data(dir)
}

/// Parse the three collections without touching the filesystem.
///
/// A missing file reads as an empty collection. Used by dry runs, `diff`
/// and `status`, which must not create placeholders.
pub fn read_data(dir: &Path) -> Result<ProjectData, DataError> {
    Ok(ProjectData {
        issues: load_records_or_empty(&dir.join(ISSUES_FILE))?,
        milestones: load_records_or_empty(&dir.join(MILESTONES_FILE))?,
        releases: load_records_or_empty(&dir.join(RELEASES_FILE))?,
    })
}

fn load_records_or_empty<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    if path.exists() {
        load_records(path)
    } else {
        Ok(Vec::new())
    }
}

/// Parse a JSON array file record by record so errors name the bad entry.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let contents = std::fs::read_to_string(path).map_err(|e| data_io_err(path, e))?;
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(&contents).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|source| DataError::Record {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}
