use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::cli::Output;
use crate::scan::Scanner;

/// Cap on the number of findings printed in verbose mode. Bounds output on
/// large scans; the scan itself is never truncated.
const MAX_DETAIL_FINDINGS: usize = 400;

#[derive(Args)]
pub struct ScanArgs {
    /// Path to scan
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Also print individual findings
    #[arg(long)]
    pub verbose: bool,
}

pub fn execute(args: ScanArgs, _output: &Output) -> Result<()> {
    let report = Scanner::new().scan_directory(&args.target);

    print!("{}", report.render_summary());

    if args.verbose {
        println!();
        println!("Details:");
        for finding in report.findings.iter().take(MAX_DETAIL_FINDINGS) {
            println!(
                "[{}] {}:{}  {}",
                finding.kind, finding.path, finding.line, finding.text
            );
        }
    }

    // Secrets are the one gate-worthy kind; everything else is informational.
    if report.has_secrets() {
        std::process::exit(1);
    }

    Ok(())
}
