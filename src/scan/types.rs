use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

use super::rules::RuleKind;

/// One rule-match occurrence at a specific file and line.
///
/// Findings are immutable once created and are collected in discovery order
/// (traversal order crossed with line order). A line matching two rules
/// yields two findings; findings are never deduplicated.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub kind: RuleKind,
    pub path: String,
    /// 1-based line number.
    pub line: usize,
    /// Line text, trimmed and truncated to `MAX_FINDING_TEXT` characters.
    pub text: String,
}

/// Maximum number of characters of line text captured per finding.
pub const MAX_FINDING_TEXT: usize = 300;

/// Complete result of one scan run. Holds the full finding list; display
/// caps are applied by callers, never here.
#[derive(Debug, Default, Serialize)]
pub struct ScanReport {
    pub findings: Vec<Finding>,
}

impl ScanReport {
    /// Tally findings per rule kind. `BTreeMap` keeps the kinds in
    /// lexicographic name order, which is also the display order.
    pub fn counts_by_kind(&self) -> BTreeMap<RuleKind, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Whether any finding is gate-worthy. Secrets are the one kind that
    /// affects exit status; everything else is informational.
    pub fn has_secrets(&self) -> bool {
        self.findings.iter().any(|f| f.kind == RuleKind::Secret)
    }

    /// Human-readable summary block: header plus one count line per kind
    /// that produced at least one finding.
    pub fn render_summary(&self) -> String {
        let mut out = String::from("Findings summary:\n");
        for (kind, count) in self.counts_by_kind() {
            let _ = writeln!(out, "- {}: {}", kind, count);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(kind: RuleKind, line: usize) -> Finding {
        Finding {
            kind,
            path: "src/app.swift".to_string(),
            line,
            text: "let t = 1".to_string(),
        }
    }

    #[test]
    fn test_counts_by_kind_orders_by_name() {
        let report = ScanReport {
            findings: vec![
                finding(RuleKind::TodoFixme, 1),
                finding(RuleKind::DebugPrint, 2),
                finding(RuleKind::TodoFixme, 3),
            ],
        };
        let counts = report.counts_by_kind();
        let kinds: Vec<_> = counts.keys().map(|k| k.as_str()).collect();
        assert_eq!(kinds, vec!["debug_print", "todo_fixme"]);
        assert_eq!(counts[&RuleKind::TodoFixme], 2);
    }

    #[test]
    fn test_render_summary_omits_absent_kinds() {
        let report = ScanReport {
            findings: vec![finding(RuleKind::Secret, 4)],
        };
        let text = report.render_summary();
        assert_eq!(text, "Findings summary:\n- secret: 1\n");
    }

    #[test]
    fn test_empty_report_renders_header_only() {
        let report = ScanReport::default();
        assert_eq!(report.render_summary(), "Findings summary:\n");
        assert!(!report.has_secrets());
    }

    #[test]
    fn test_has_secrets_ignores_other_kinds() {
        let report = ScanReport {
            findings: vec![finding(RuleKind::DebugPrint, 1), finding(RuleKind::TodoFixme, 2)],
        };
        assert!(!report.has_secrets());
    }
}
