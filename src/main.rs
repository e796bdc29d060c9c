//! Command line front-end: rebase hrefs given as arguments or on stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use href_rebase::logging::init_logging;
use href_rebase::models::RelocationReport;
use href_rebase::{HrefRelocator, RelocationConfig};

/// Rewrite relative hrefs so they keep pointing at the same resources after their document
/// moves from one base URL to another.
#[derive(Debug, Parser)]
#[command(name = "href-rebase", version, about)]
struct Cli {
    /// Base URL the hrefs were written against.
    #[arg(long, value_name = "URL")]
    old_base: Option<String>,
    /// Base URL the hrefs will be resolved against.
    #[arg(long, value_name = "URL")]
    new_base: Option<String>,
    /// Configuration file (defaults to href-rebase.config.json in the working directory).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print the full relocation report as JSON.
    #[arg(long)]
    json: bool,
    /// Log relocation decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
    /// Hrefs to rewrite. Read one per line from stdin when omitted.
    hrefs: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RelocationConfig::from_path(path)?,
        None => {
            let cwd = std::env::current_dir().context("failed to determine working directory")?;
            RelocationConfig::discover(&cwd)?
        }
    };

    if let Err(err) = init_logging(config.log_filter.as_deref(), cli.verbose) {
        eprintln!("{err:#}");
    }

    let (old_base, new_base) = config.with_overrides(cli.old_base, cli.new_base).bases()?;
    let relocator = HrefRelocator::new(old_base, new_base);

    let hrefs = if cli.hrefs.is_empty() {
        read_hrefs(io::stdin().lock()).context("failed to read hrefs from stdin")?
    } else {
        cli.hrefs
    };

    let report = relocator.relocate_all(&hrefs);
    let mut out = io::stdout().lock();
    write_report(&mut out, &report, cli.json).context("failed to write output")?;
    out.flush()?;

    Ok(())
}

fn read_hrefs(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut hrefs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            hrefs.push(trimmed.to_string());
        }
    }
    Ok(hrefs)
}

fn write_report(out: &mut impl Write, report: &RelocationReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    } else {
        for href in &report.hrefs {
            writeln!(out, "{}", href.href)?;
        }
    }
    Ok(())
}
