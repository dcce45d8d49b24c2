//! docwright: project docs and wiki generator.
//!
//! # Usage
//!
//! ```text
//! docwright build [--dry-run] [--data-dir data] [--config bootstrap.yml] [--out docs]
//! docwright diff
//! docwright status [--json]
//! docwright data init [--data-dir data]
//! docwright wiki render <dir>
//! docwright wiki publish [--work-dir wiki_content] [--strict]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    build::BuildArgs, data::DataCommand, diff::DiffArgs, status::StatusArgs, wiki::WikiCommand,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "docwright",
    version,
    about = "Generate project docs and wiki pages from issue, milestone and release data",
    long_about = None,
)]
struct Cli {
    /// Only log warnings and errors.
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the documentation pages into the output directory.
    Build(BuildArgs),

    /// Show unified diff of what build would write.
    Diff(DiffArgs),

    /// Show per-page freshness and a summary of the data directory.
    Status(StatusArgs),

    /// Manage the JSON data directory.
    Data {
        #[command(subcommand)]
        command: DataCommand,
    },

    /// Render or publish the repository wiki.
    Wiki {
        #[command(subcommand)]
        command: WikiCommand,
    },
}

fn init_tracing(quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);
    match cli.command {
        Commands::Build(args) => args.run(),
        Commands::Diff(args) => args.run(),
        Commands::Status(args) => args.run(),
        Commands::Data { command } => commands::data::run(command),
        Commands::Wiki { command } => commands::wiki::run(command),
    }
}
