use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// The fixed set of heuristic rules applied to every scanned line.
///
/// Variants are declared in lexicographic order of their wire names so the
/// derived `Ord` matches the display ordering of summary output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    DebugPrint,
    Secret,
    SwiftForceUnwrap,
    TodoFixme,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::DebugPrint => "debug_print",
            RuleKind::Secret => "secret",
            RuleKind::SwiftForceUnwrap => "swift_force_unwrap",
            RuleKind::TodoFixme => "todo_fixme",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named pattern-matching heuristic.
#[derive(Debug)]
pub struct Rule {
    pub kind: RuleKind,
    pub regex: Regex,
    pub description: &'static str,
}

lazy_static! {
    /// Static rule table, compiled once at first use. This is a fixed
    /// enumerated collection, not a plugin registry.
    pub static ref RULES: Vec<Rule> = vec![
        Rule {
            kind: RuleKind::TodoFixme,
            regex: Regex::new(r"\b(TODO|FIXME|HACK)\b").unwrap(),
            description: "Leftover TODO/FIXME/HACK markers",
        },
        Rule {
            kind: RuleKind::Secret,
            regex: Regex::new(
                r#"(?i)(api[_-]?key|secret|token|password)\s*[:=]\s*['"][^'"]{8,}['"]"#,
            )
            .unwrap(),
            description: "Hardcoded secret-like assignments",
        },
        Rule {
            kind: RuleKind::SwiftForceUnwrap,
            // Heuristic with a known false-positive rate; kept deliberately loose.
            regex: Regex::new(r"[A-Za-z0-9_)\]]!\b").unwrap(),
            description: "Force-unwrap style suffix",
        },
        Rule {
            kind: RuleKind::DebugPrint,
            regex: Regex::new(r"\b(print\(|console\.log\(|NSLog\(|logger\.(debug|trace)\b)")
                .unwrap(),
            description: "Debug/print logging left in",
        },
    ];
}
