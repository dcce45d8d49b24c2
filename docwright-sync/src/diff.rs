//! Unified diff support for `docwright diff`.

use std::path::PathBuf;

use similar::TextDiff;

use crate::error::SyncError;
use crate::pipeline::{read_existing, render_pages, BuildRequest};

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render what `build` would generate and compare it to current on-disk content.
///
/// No files are written. Missing pages diff against an empty file.
pub fn diff_docs(req: &BuildRequest) -> Result<Vec<FileDiff>, SyncError> {
    let mut diffs = Vec::new();
    for rendered in render_pages(req, false)? {
        let existing = read_existing(&rendered.path)?.unwrap_or_default();
        if existing == rendered.content {
            continue;
        }

        let relative = rendered
            .path
            .strip_prefix(&req.out_dir)
            .unwrap_or(rendered.path.as_path());
        let old_header = format!("a/{}", relative.display());
        let new_header = format!("b/{}", relative.display());
        let unified = TextDiff::from_lines(&existing, &rendered.content)
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();

        diffs.push(FileDiff {
            path: rendered.path,
            unified_diff: unified,
        });
    }
    Ok(diffs)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::build_docs;
    use crate::pipeline::test_support::project;

    #[test]
    fn no_diffs_after_clean_build() {
        let tmp = TempDir::new().expect("tmp");
        let req = project(tmp.path());
        build_docs(&req, false).expect("build");

        let diffs = diff_docs(&req).expect("diff");
        assert!(diffs.is_empty(), "built docs should have no diff");
    }

    #[test]
    fn local_edit_produces_unified_diff() {
        let tmp = TempDir::new().expect("tmp");
        let req = project(tmp.path());
        build_docs(&req, false).expect("build");

        let target = req.out_dir.join("monitoring.md");
        let edited = format!("{}\nmanual tweak\n", fs::read_to_string(&target).expect("read"));
        fs::write(&target, edited).expect("write");

        let diffs = diff_docs(&req).expect("diff");
        assert_eq!(diffs.len(), 1);
        let diff = &diffs[0];
        assert!(diff.path.ends_with("monitoring.md"));
        assert!(diff.unified_diff.contains("--- a/monitoring.md"));
        assert!(diff.unified_diff.contains("+++ b/monitoring.md"));
        assert!(diff.unified_diff.contains("-manual tweak"));
        assert!(diff.unified_diff.contains("@@"));
    }

    #[test]
    fn new_release_shows_up_in_changelog_diff() {
        let tmp = TempDir::new().expect("tmp");
        let req = project(tmp.path());
        build_docs(&req, false).expect("build");

        fs::write(
            req.data_dir.join("releases.json"),
            r#"[
  {"tag_name": "v1.1", "published_at": "2024-03-01T09:30:00Z", "body": "Fixes"},
  {"tag_name": "v1.0", "published_at": "2024-01-15T00:00:00Z", "body": "Initial release"}
]"#,
        )
        .expect("write releases");

        let diffs = diff_docs(&req).expect("diff");
        assert_eq!(diffs.len(), 1);
        assert!(diffs[0].path.ends_with("changelog.md"));
        assert!(diffs[0].unified_diff.contains("+## [v1.1] - 2024-03-01"));
    }

    #[test]
    fn missing_docs_diff_against_empty() {
        let tmp = TempDir::new().expect("tmp");
        let req = project(tmp.path());
        let diffs = diff_docs(&req).expect("diff");
        assert_eq!(diffs.len(), 6);
        assert!(!req.out_dir.exists(), "diff must not create the output dir");
    }
}
