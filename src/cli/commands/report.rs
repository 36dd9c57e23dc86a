use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::cli::Output;
use crate::scan::Scanner;
use crate::{diff, report};

#[derive(Args)]
pub struct ReportArgs {
    /// Base ref forwarded to the diff summarizer
    #[arg(long, value_name = "REF")]
    pub base: Option<String>,

    /// Path forwarded to the scanner
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub target: PathBuf,

    /// Output file, overwritten if present
    #[arg(long, value_name = "PATH", default_value = "REVIEW_REPORT.md")]
    pub out: PathBuf,
}

pub fn execute(args: ReportArgs, output: &Output) -> Result<()> {
    let summary = diff::summarize(args.base.as_deref()).context("diff summary failed")?;

    let scan_report = Scanner::new().scan_directory(&args.target);
    let scan_text = scan_report.render_summary();

    let generated_at = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    let md = report::render(&summary, &scan_text, &generated_at);

    fs::write(&args.out, md)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    output.success(&format!("Wrote {}", args.out.display()));

    Ok(())
}
