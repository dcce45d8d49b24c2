//! `docwright build`: render and write the documentation pages.

use anyhow::{Context, Result};
use clap::Args;

use docwright_sync::{build_docs, WriteResult};

use super::SourceArgs;

/// Arguments for `docwright build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildArgs {
    pub fn run(self) -> Result<()> {
        let req = self.source.request();
        let report = build_docs(&req, self.dry_run)
            .with_context(|| format!("build failed for '{}'", req.out_dir.display()))?;
        print_results(&report.writes, self.dry_run);
        Ok(())
    }
}

fn print_results(writes: &[WriteResult], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let written = writes
        .iter()
        .filter(|r| {
            matches!(
                r,
                WriteResult::Written { .. } | WriteResult::WouldWrite { .. }
            )
        })
        .count();
    let unchanged = writes.len() - written;

    println!("{prefix}✓ docs built ({written} written, {unchanged} unchanged)");

    for r in writes {
        match r {
            WriteResult::Written { path } => println!("  ✎  {}", path.display()),
            WriteResult::WouldWrite { path } => println!("  ~  {}", path.display()),
            WriteResult::Unchanged { path } => println!("  ·  {}", path.display()),
        }
    }
}
