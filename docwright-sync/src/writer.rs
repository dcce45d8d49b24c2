//! Atomic writer and the doc build.
//!
//! ## `write_output` protocol
//!
//! 1. Normalise line endings to LF.
//! 2. Compare with the content already on disk; skip if identical.
//! 3. Write to `<path>.docwright.tmp`.
//! 4. Rename to the final path (atomic on POSIX).

use std::path::{Path, PathBuf};

use crate::error::{io_err, SyncError};
use crate::pipeline::{normalize_line_endings, read_existing, render_pages, BuildRequest};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped; the same content is already on disk.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// write_output
// ---------------------------------------------------------------------------

/// Atomically write `content` to `path`, creating parent directories.
pub fn write_output(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, SyncError> {
    let tmp = PathBuf::from(format!("{}.docwright.tmp", path.display()));
    write_output_with_tmp(path, content, dry_run, &tmp)
}

fn write_output_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, SyncError> {
    let normalized = normalize_line_endings(content);
    let content = normalized.as_str();

    if read_existing(path)?.as_deref() == Some(content) {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// build_docs
// ---------------------------------------------------------------------------

/// Outcome of one doc build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub writes: Vec<WriteResult>,
}

impl BuildReport {
    pub fn written(&self) -> usize {
        self.count(|w| matches!(w, WriteResult::Written { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|w| matches!(w, WriteResult::Unchanged { .. }))
    }

    pub fn would_write(&self) -> usize {
        self.count(|w| matches!(w, WriteResult::WouldWrite { .. }))
    }

    fn count(&self, pred: impl Fn(&WriteResult) -> bool) -> usize {
        self.writes.iter().filter(|w| pred(w)).count()
    }
}

/// Load data and config, render the six doc pages and write them under
/// `req.out_dir`.
///
/// A dry run neither writes pages nor creates data placeholders.
pub fn build_docs(req: &BuildRequest, dry_run: bool) -> Result<BuildReport, SyncError> {
    let pages = render_pages(req, !dry_run)?;

    if !dry_run && !req.out_dir.exists() {
        std::fs::create_dir_all(&req.out_dir).map_err(|e| io_err(&req.out_dir, e))?;
    }

    let mut writes = Vec::with_capacity(pages.len());
    for rendered in pages {
        writes.push(write_output(&rendered.path, &rendered.content, dry_run)?);
    }
    Ok(BuildReport { writes })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::project;
    use std::fs;
    use std::thread::sleep;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_content(path: &Path, content: &str) -> WriteResult {
        write_output(path, content, false).unwrap()
    }

    #[test]
    fn first_write_returns_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.md");
        let result = write_content(&path, "hello");
        assert!(matches!(result, WriteResult::Written { .. }));
        assert!(path.exists());
    }

    #[test]
    fn second_write_same_content_returns_unchanged() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.md");
        write_content(&path, "same content");
        let result = write_content(&path, "same content");
        assert!(matches!(result, WriteResult::Unchanged { .. }));
    }

    #[test]
    fn changed_content_returns_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.md");
        write_content(&path, "v1");
        let result = write_content(&path, "v2");
        assert!(matches!(result, WriteResult::Written { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }

    #[test]
    fn dry_run_does_not_write_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.md");
        let result = write_output(&path, "content", true).unwrap();
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert!(!path.exists(), "dry-run must not create files");
    }

    #[test]
    fn dry_run_still_reports_unchanged() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("same.md");
        write_content(&path, "content");
        let result = write_output(&path, "content", true).unwrap();
        assert!(matches!(result, WriteResult::Unchanged { .. }));
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clean.md");
        write_content(&path, "data");
        let tmp_path = PathBuf::from(format!("{}.docwright.tmp", path.display()));
        assert!(!tmp_path.exists(), ".docwright.tmp must be cleaned up");
    }

    #[test]
    fn creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site").join("docs").join("index.md");
        write_content(&path, "content");
        assert!(path.exists());
    }

    #[test]
    fn crlf_and_lf_content_compare_equal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("normalize.md");

        let first = write_content(&path, "line1\r\nline2\r\n");
        assert!(matches!(first, WriteResult::Written { .. }));

        let second = write_content(&path, "line1\nline2\n");
        assert!(matches!(second, WriteResult::Unchanged { .. }));

        assert_eq!(fs::read_to_string(&path).unwrap(), "line1\nline2\n");
    }

    #[test]
    #[cfg(unix)]
    fn rename_failure_leaves_original_and_cleans_tmp() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let readonly_dir = root.path().join("readonly");
        fs::create_dir_all(&readonly_dir).unwrap();

        let path = readonly_dir.join("file.md");
        fs::write(&path, "original").unwrap();

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o555);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        let tmp_dir = TempDir::new().unwrap();
        let tmp_path = tmp_dir.path().join("file.md.docwright.tmp");

        let result = write_output_with_tmp(&path, "new content", false, &tmp_path);

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        // Root may ignore directory permissions; only assert when it failed.
        if result.is_err() {
            assert_eq!(fs::read_to_string(&path).unwrap(), "original");
            assert!(!tmp_path.exists(), ".docwright.tmp should be cleaned up");
        }
    }

    #[test]
    fn build_writes_all_pages_then_reports_unchanged() {
        let tmp = TempDir::new().unwrap();
        let req = project(tmp.path());

        let first = build_docs(&req, false).unwrap();
        assert_eq!(first.written(), 6);
        assert!(req.out_dir.join("changelog.md").exists());

        let target = req.out_dir.join("index.md");
        let mtime_1 = fs::metadata(&target).unwrap().modified().unwrap();
        sleep(Duration::from_millis(1100));

        let second = build_docs(&req, false).unwrap();
        assert_eq!(second.unchanged(), 6);
        let mtime_2 = fs::metadata(&target).unwrap().modified().unwrap();
        assert_eq!(mtime_1, mtime_2, "unchanged page was rewritten");
    }

    #[test]
    fn dry_run_build_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let req = project(tmp.path());
        let report = build_docs(&req, true).unwrap();
        assert_eq!(report.would_write(), 6);
        assert!(!req.out_dir.exists());
        assert!(!req.data_dir.join("issues.json").exists());
    }

    #[test]
    fn build_creates_data_placeholders() {
        let tmp = TempDir::new().unwrap();
        let req = project(tmp.path());
        build_docs(&req, false).unwrap();
        assert_eq!(
            fs::read_to_string(req.data_dir.join("issues.json")).unwrap(),
            "[]"
        );
        assert!(fs::read_to_string(req.data_dir.join("releases.json"))
            .unwrap()
            .contains("v1.0"));
    }

    #[test]
    fn changelog_lands_on_disk() {
        let tmp = TempDir::new().unwrap();
        let req = project(tmp.path());
        build_docs(&req, false).unwrap();
        let changelog = fs::read_to_string(req.out_dir.join("changelog.md")).unwrap();
        assert!(changelog.contains("## [v1.0] - 2024-01-15\n\nInitial release\n"));
    }
}
