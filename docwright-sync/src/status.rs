//! Per-page freshness for `docwright status`.

use std::path::PathBuf;

use docwright_renderer::DocPage;

use crate::error::SyncError;
use crate::pipeline::{read_existing, render_pages, BuildRequest};

/// How a page on disk compares with a fresh render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Current,
    Modified,
    Missing,
}

impl PageState {
    pub fn label(&self) -> &'static str {
        match self {
            PageState::Current => "current",
            PageState::Modified => "modified",
            PageState::Missing => "missing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStatus {
    pub page: DocPage,
    pub path: PathBuf,
    pub state: PageState,
}

/// Compare every doc page against what `build` would render.
pub fn page_status(req: &BuildRequest) -> Result<Vec<PageStatus>, SyncError> {
    let mut statuses = Vec::new();
    for rendered in render_pages(req, false)? {
        let state = match read_existing(&rendered.path)? {
            None => PageState::Missing,
            Some(existing) if existing == rendered.content => PageState::Current,
            Some(_) => PageState::Modified,
        };
        statuses.push(PageStatus {
            page: rendered.page,
            path: rendered.path,
            state,
        });
    }
    Ok(statuses)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::build_docs;
    use crate::pipeline::test_support::project;

    #[test]
    fn all_missing_before_first_build() {
        let tmp = TempDir::new().unwrap();
        let req = project(tmp.path());
        let statuses = page_status(&req).unwrap();
        assert_eq!(statuses.len(), 6);
        assert!(statuses.iter().all(|s| s.state == PageState::Missing));
    }

    #[test]
    fn edited_and_deleted_pages_are_flagged() {
        let tmp = TempDir::new().unwrap();
        let req = project(tmp.path());
        build_docs(&req, false).unwrap();

        fs::write(req.out_dir.join("contributing.md"), "hand edited\n").unwrap();
        fs::remove_file(req.out_dir.join("index.md")).unwrap();

        let statuses = page_status(&req).unwrap();
        let state_of = |page: DocPage| {
            statuses
                .iter()
                .find(|s| s.page == page)
                .map(|s| s.state)
                .unwrap()
        };
        assert_eq!(state_of(DocPage::Contributing), PageState::Modified);
        assert_eq!(state_of(DocPage::Index), PageState::Missing);
        assert_eq!(state_of(DocPage::Changelog), PageState::Current);
    }
}
