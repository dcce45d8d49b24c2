//! `docwright data`: data directory housekeeping.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;

use docwright_core::data::ensure_data_files;

#[derive(Subcommand, Debug)]
pub enum DataCommand {
    /// Create the data directory and empty placeholder files.
    Init {
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

pub fn run(command: DataCommand) -> Result<()> {
    match command {
        DataCommand::Init { data_dir } => {
            let created = ensure_data_files(&data_dir)
                .with_context(|| format!("failed to initialise '{}'", data_dir.display()))?;
            if created.is_empty() {
                println!("✓ '{}' already has all data files", data_dir.display());
            } else {
                println!("✓ created {} placeholder file(s)", created.len());
                for path in created {
                    println!("  ✎  {}", path.display());
                }
            }
            Ok(())
        }
    }
}
