use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::diff;

/// Cap on files shown in the human-readable rendering.
const TOP_FILES_SHOWN: usize = 25;

#[derive(Args)]
pub struct DiffArgs {
    /// Base ref to diff against (e.g. origin/main). Default: working tree vs HEAD
    #[arg(long, value_name = "REF")]
    pub base: Option<String>,

    /// Output a single JSON object instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: DiffArgs, _output: &Output) -> Result<()> {
    // A failing git invocation (bad ref, not a repository) is an environment
    // error for the caller to fix: surface its output and exit 2. Parse
    // errors on successful output still propagate normally.
    let raw = match diff::git_numstat(args.base.as_deref()) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(2);
        }
    };
    let summary = diff::parse_numstat(&raw)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Files changed: {}", summary.files_changed);
        println!("Lines: +{}  -{}", summary.lines_added, summary.lines_deleted);
        for file in summary.files.iter().take(TOP_FILES_SHOWN) {
            println!("- {}: +{} -{}", file.path, file.added, file.deleted);
        }
    }

    Ok(())
}
