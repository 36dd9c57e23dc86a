//! Markdown review report: stitches a diff summary and the scanner's text
//! output into one document with a fixed section layout.

use std::fmt::Write;

use crate::diff::DiffSummary;

/// Cap on the "Top changed files" list. A presentation truncation; the full
/// file list stays in the `DiffSummary`.
pub const TOP_CHANGED_FILES: usize = 15;

/// Cap on scanner output lines embedded in the report.
pub const SCAN_EXCERPT_LINES: usize = 50;

/// Static reviewer checklist. Fixed text, not derived from the scan.
pub const CHECKLIST: &[&str] = &[
    "Correctness: edge cases + error handling",
    "Concurrency/threading (if applicable)",
    "Security: inputs, authz, secrets, logging PII",
    "Performance hot paths",
    "Tests added/updated + CI green",
];

/// Assemble the full Markdown document. The timestamp is passed in so the
/// rendering itself stays deterministic.
pub fn render(diff: &DiffSummary, scan_output: &str, generated_at: &str) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# Review Report");
    let _ = writeln!(md);
    let _ = writeln!(md, "Generated: {generated_at}");
    let _ = writeln!(md);

    let _ = writeln!(md, "## Diff summary");
    let _ = writeln!(md);
    let _ = writeln!(md, "- Files changed: {}", diff.files_changed);
    let _ = writeln!(md, "- Lines: +{} / -{}", diff.lines_added, diff.lines_deleted);
    let _ = writeln!(md);
    let _ = writeln!(md, "Top changed files:");
    for file in diff.files.iter().take(TOP_CHANGED_FILES) {
        let _ = writeln!(md, "- `{}` (+{} / -{})", file.path, file.added, file.deleted);
    }
    let _ = writeln!(md);

    let _ = writeln!(md, "## Automated scan");
    let _ = writeln!(md);
    let _ = writeln!(md, "```");
    for line in scan_output.lines().take(SCAN_EXCERPT_LINES) {
        let _ = writeln!(md, "{line}");
    }
    let _ = writeln!(md, "```");
    let _ = writeln!(md);

    let _ = writeln!(md, "## Reviewer checklist");
    let _ = writeln!(md);
    for item in CHECKLIST {
        let _ = writeln!(md, "- [ ] {item}");
    }

    md
}
