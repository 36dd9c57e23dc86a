//! Git diff summarizer: runs `git diff --numstat` and aggregates the
//! per-file added/deleted counts into a churn-sorted summary.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::process::Command;

/// Per-file stats from one numstat line. Binary files (numstat `-`) carry
/// zero for both counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffFileStat {
    pub path: String,
    pub added: u64,
    pub deleted: u64,
}

impl DiffFileStat {
    /// Added plus deleted lines; the sort key for "most changed" lists.
    pub fn churn(&self) -> u64 {
        self.added + self.deleted
    }
}

/// Aggregated diff shape. `files` is sorted descending by churn with a
/// stable sort, so equal-churn files keep their numstat order.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub files_changed: usize,
    pub lines_added: u64,
    pub lines_deleted: u64,
    pub files: Vec<DiffFileStat>,
}

/// Run the numstat diff command and return its stdout.
///
/// With no base the working tree is compared against HEAD; with a base the
/// three-dot (merge-base-relative) range `<base>...` is used. A non-zero git
/// exit becomes an error carrying the command's combined output, for the
/// caller to surface verbatim.
pub fn git_numstat(base: Option<&str>) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.arg("diff").arg("--numstat");
    if let Some(base) = base {
        cmd.arg(format!("{base}..."));
    }
    tracing::debug!("running {:?}", cmd);

    let output = cmd.output().context("failed to run git")?;
    if !output.status.success() {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        bail!("{}", combined.trim_end());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse numstat output: one `added<TAB>deleted<TAB>path` record per line.
///
/// The format is assumed stable, so a malformed line is a fatal error for
/// the whole run rather than a skip.
pub fn parse_numstat(raw: &str) -> Result<DiffSummary> {
    let mut files = Vec::new();
    let mut lines_added = 0u64;
    let mut lines_deleted = 0u64;

    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.splitn(3, '\t');
        let (Some(added), Some(deleted), Some(path)) =
            (fields.next(), fields.next(), fields.next())
        else {
            bail!("malformed numstat line: {line:?}");
        };
        let added = parse_count(added).with_context(|| format!("malformed numstat line: {line:?}"))?;
        let deleted =
            parse_count(deleted).with_context(|| format!("malformed numstat line: {line:?}"))?;

        lines_added += added;
        lines_deleted += deleted;
        files.push(DiffFileStat {
            path: path.to_string(),
            added,
            deleted,
        });
    }

    // Vec::sort_by is stable: ties keep input order.
    files.sort_by(|a, b| b.churn().cmp(&a.churn()));

    Ok(DiffSummary {
        files_changed: files.len(),
        lines_added,
        lines_deleted,
        files,
    })
}

fn parse_count(field: &str) -> Result<u64> {
    if field == "-" {
        // Binary file marker: no line stats.
        return Ok(0);
    }
    field
        .parse()
        .with_context(|| format!("invalid count field: {field:?}"))
}

/// Convenience wrapper: run the diff and parse it in one step.
pub fn summarize(base: Option<&str>) -> Result<DiffSummary> {
    parse_numstat(&git_numstat(base)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numstat_with_binary_marker() {
        let summary = parse_numstat("3\t1\tfoo.py\n-\t-\tbinary.png\n").unwrap();
        assert_eq!(summary.files_changed, 2);
        assert_eq!(summary.lines_added, 3);
        assert_eq!(summary.lines_deleted, 1);
        // foo.py churn 4 sorts before binary.png churn 0.
        assert_eq!(summary.files[0].path, "foo.py");
        assert_eq!(summary.files[1].path, "binary.png");
        assert_eq!(summary.files[1].added, 0);
        assert_eq!(summary.files[1].deleted, 0);
    }

    #[test]
    fn test_sort_is_stable_for_equal_churn() {
        let summary = parse_numstat("2\t2\tfirst.rs\n1\t3\tsecond.rs\n5\t0\ttop.rs\n").unwrap();
        let paths: Vec<_> = summary.files.iter().map(|f| f.path.as_str()).collect();
        // top.rs (5) first, then the two churn-4 files in input order.
        assert_eq!(paths, vec!["top.rs", "first.rs", "second.rs"]);
    }

    #[test]
    fn test_empty_input_yields_zeroed_summary() {
        let summary = parse_numstat("").unwrap();
        assert_eq!(summary.files_changed, 0);
        assert_eq!(summary.lines_added, 0);
        assert_eq!(summary.lines_deleted, 0);
        assert!(summary.files.is_empty());
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        assert!(parse_numstat("3\tonly-two-fields\n").is_err());
        assert!(parse_numstat("x\t1\tfoo.py\n").is_err());
    }

    #[test]
    fn test_path_may_contain_tabs() {
        // splitn(3) keeps any further tabs inside the path field.
        let summary = parse_numstat("1\t0\tweird\tname.txt\n").unwrap();
        assert_eq!(summary.files[0].path, "weird\tname.txt");
    }

    #[test]
    fn test_json_shape() {
        let summary = parse_numstat("3\t1\tfoo.py\n").unwrap();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["files_changed"], 1);
        assert_eq!(value["lines_added"], 3);
        assert_eq!(value["lines_deleted"], 1);
        assert_eq!(value["files"][0]["path"], "foo.py");
    }
}
