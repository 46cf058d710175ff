//! Terminal output formatting.
//!
//! We keep formatting code in one place so:
//! - the parsing code stays clean and testable
//! - output changes are localized

use crate::domain::{Notation, RunConfig};
use crate::parse::ParseResult;

/// Format the run header: input projections plus anchor diagnostics.
pub fn format_run_summary(result: &ParseResult, config: &RunConfig) -> String {
    let mut out = String::new();

    out.push_str("=== shot - coordinate scattershot ===\n");
    out.push_str(&format!("Input : '{}'\n", result.raw_input));
    out.push_str(&format!(
        "Digits: '{}' | canonical: '{}'\n",
        result.digits, result.canonical
    ));
    out.push_str(&format!("Marker name: {}\n", config.marker_name));

    if result.anchors_found == 0 {
        out.push_str("No admissible longitude window (100-129 W) found.\n");
        return out;
    }

    out.push_str(&format!("Anchors: {}\n", result.anchors_found));
    for skip in &result.skipped {
        out.push_str(&format!(
            "  (skipped anchor '{}' at {}) {}\n",
            skip.degrees, skip.index, skip.reason
        ));
    }

    out
}

/// Format the three candidate lists with their match labels.
pub fn format_candidate_lists(result: &ParseResult) -> String {
    let mut out = String::new();

    for notation in Notation::ALL {
        let list = result.by_notation(notation);
        out.push_str(&format!(
            "\n{} ({}):\n",
            capitalize(notation.display_name()),
            list.len()
        ));
        if list.is_empty() {
            out.push_str("  (none)\n");
            continue;
        }
        for labeled in list {
            out.push_str(&format!(
                "  {}{}\n",
                labeled.candidate.display,
                labeled.label.report_suffix()
            ));
        }
    }

    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn config(raw: &str) -> RunConfig {
        RunConfig {
            raw_input: raw.to_string(),
            marker_name: "X".to_string(),
            only: None,
            debug_bundle: false,
        }
    }

    #[test]
    fn summary_reports_missing_anchor() {
        let result = parse("394567");
        let text = format_run_summary(&result, &config("394567"));
        assert!(text.contains("No admissible longitude window"));
    }

    #[test]
    fn summary_reports_skipped_anchors() {
        let result = parse("59120");
        let text = format_run_summary(&result, &config("59120"));
        assert!(text.contains("skipped anchor '120' at 2"));
        assert!(text.contains("must start with 2, 3, or 4"));
    }

    #[test]
    fn lists_carry_labels_and_counts() {
        let result = parse("39d120d");
        let text = format_candidate_lists(&result);
        assert!(text.contains("Decimal degrees (1):"));
        assert!(text.contains("39.0 deg N x 120.0 deg W  [exact]"));
        assert!(text.contains("(none)"));
    }
}
