//! Output formatter implementations.

use crate::path::{Predicate, RelationReport};
use crate::Result;

use super::OutputFormatter;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Formatter for human-readable output.
///
/// ```text
/// subject:      /work/src
/// other:        /work
/// relationship: descendant
/// descendant:   yes
/// ancestor:     no
/// sibling:      no
/// equal:        no
/// ```
pub struct HumanFormatter;

fn line(key: &str, value: impl std::fmt::Display) -> String {
    let label = format!("{key}:");
    format!("{label:<14}{value}")
}

impl OutputFormatter for HumanFormatter {
    fn format(&self, report: &RelationReport) -> Result<String> {
        let mut lines = vec![
            line("subject", &report.subject),
            line("other", &report.other),
            line("relationship", report.relationship),
        ];

        for predicate in Predicate::ALL {
            lines.push(line(&predicate.to_string(), yes_no(report.holds(predicate))));
        }

        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RelationReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, report: &RelationReport) -> Result<String> {
        Ok(serde_yaml::to_string(report)?)
    }
}
