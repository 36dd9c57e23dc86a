use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use super::rules::{RULES, Rule};
use super::types::{Finding, MAX_FINDING_TEXT, ScanReport};

/// Directory names pruned at any depth. Enumerated, not inferred from
/// gitignore files: version-control metadata, build outputs and dependency
/// caches.
pub const SKIP_DIRS: &[&str] = &[
    ".git",
    ".derivedData",
    "DerivedData",
    "build",
    ".build",
    "Pods",
    "Carthage",
    "node_modules",
    "target",
];

/// Extension allow-list for text-like files. Everything else is ignored,
/// which doubles as the binary-file filter.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "swift", "m", "mm", "h", "kt", "kts", "go", "py", "rs", "js", "ts", "tsx", "jsx", "json",
    "yml", "yaml", "md", "txt", "toml",
];

/// Single-pass, single-threaded red-flag scanner.
pub struct Scanner {
    rules: &'static [Rule],
}

impl Scanner {
    pub fn new() -> Self {
        Self { rules: &RULES }
    }

    /// Walk the tree rooted at `root` and apply every rule to every line of
    /// every text-like file. Never fails: unreadable files are skipped and
    /// the walk continues.
    pub fn scan_directory(&self, root: &Path) -> ScanReport {
        let mut findings = Vec::new();

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!("walk error: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !has_text_extension(entry.path()) {
                continue;
            }
            match fs::read(entry.path()) {
                Ok(bytes) => {
                    let content = String::from_utf8_lossy(&bytes);
                    let path = entry.path().to_string_lossy();
                    self.scan_lines(&path, &content, &mut findings);
                }
                Err(err) => {
                    // File disappeared or is unreadable: skip, keep going.
                    tracing::debug!("skipping {}: {err}", entry.path().display());
                }
            }
        }

        ScanReport { findings }
    }

    /// Apply every rule to each line independently. At most one finding per
    /// rule per line (a search, not a global findall); a line may still
    /// produce findings for several different rules.
    fn scan_lines(&self, path: &str, content: &str, findings: &mut Vec<Finding>) {
        for (idx, line) in content.lines().enumerate() {
            for rule in self.rules {
                if rule.regex.is_match(line) {
                    findings.push(Finding {
                        kind: rule.kind,
                        path: path.to_string(),
                        line: idx + 1,
                        text: truncate_chars(line.trim(), MAX_FINDING_TEXT),
                    });
                }
            }
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    // Depth 0 is the scan root itself; it is never pruned even if its name
    // collides with a skip entry.
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIP_DIRS.contains(&name))
}

fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext))
}

/// Character-based truncation that never splits a UTF-8 code point.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
