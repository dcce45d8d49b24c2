//! `docwright status`: page freshness and data summary.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use docwright_core::data::{read_data, DataSummary};
use docwright_sync::{page_status, PageState, PageStatus};

use super::SourceArgs;

/// Arguments for `docwright status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let req = self.source.request();
        let summary = read_data(&req.data_dir)
            .with_context(|| format!("failed to read data from '{}'", req.data_dir.display()))?
            .summary();
        let pages = page_status(&req).context("status check failed")?;

        if self.json {
            return print_json(summary, &pages);
        }
        print_table(&summary, &pages);
        Ok(())
    }
}

#[derive(Serialize)]
struct StatusReportJson<'a> {
    data: DataSummary,
    pages: Vec<PageStatusJson<'a>>,
}

#[derive(Serialize)]
struct PageStatusJson<'a> {
    path: String,
    status: &'a str,
}

#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "page")]
    page: String,
    #[tabled(rename = "status")]
    status: String,
}

fn print_json(summary: DataSummary, pages: &[PageStatus]) -> Result<()> {
    let payload = StatusReportJson {
        data: summary,
        pages: pages
            .iter()
            .map(|p| PageStatusJson {
                path: p.path.display().to_string(),
                status: p.state.label(),
            })
            .collect(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize status JSON")?
    );
    Ok(())
}

fn print_table(summary: &DataSummary, pages: &[PageStatus]) {
    println!(
        "docwright v{} | {} open / {} closed issues | {} open / {} closed milestones | {} releases",
        env!("CARGO_PKG_VERSION"),
        summary.open_issues,
        summary.closed_issues,
        summary.open_milestones,
        summary.closed_milestones,
        summary.releases,
    );
    if let Some(latest) = &summary.latest_release {
        println!("Latest release: {}", latest.bold());
    }

    let separator = "■".repeat(48).bright_black().to_string();
    println!("{separator}");
    println!(
        "Indicators: {} CURRENT  {} MODIFIED  {} MISSING",
        indicator(PageState::Current),
        indicator(PageState::Modified),
        indicator(PageState::Missing),
    );
    println!("{separator}");

    let rows: Vec<StatusTableRow> = pages
        .iter()
        .map(|p| StatusTableRow {
            page: p.path.display().to_string(),
            status: format!("{} {}", indicator(p.state), p.state.label().to_uppercase()),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    if pages.iter().any(|p| p.state != PageState::Current) {
        println!("Run 'docwright build' to regenerate the docs.");
    }
}

fn indicator(state: PageState) -> String {
    match state {
        PageState::Current => "■".green().bold().to_string(),
        PageState::Modified => "■".red().bold().to_string(),
        PageState::Missing => "■".bright_black().bold().to_string(),
    }
}
