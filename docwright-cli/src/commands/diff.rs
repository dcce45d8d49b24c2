//! `docwright diff`: show unified diffs for what build would write.

use anyhow::{Context, Result};
use clap::Args;

use docwright_sync::diff_docs;

use super::SourceArgs;

/// Arguments for `docwright diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let req = self.source.request();
        let diffs = diff_docs(&req)
            .with_context(|| format!("diff failed for '{}'", req.out_dir.display()))?;

        if diffs.is_empty() {
            println!("No differences in '{}'.", req.out_dir.display());
            return Ok(());
        }

        for diff in diffs {
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }

        Ok(())
    }
}
