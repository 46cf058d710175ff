//! Debug bundle writer for inspecting how a digit string expanded.
//!
//! The bundle is a markdown file under `debug/` dumping every intermediate
//! the pipeline produced: projections, anchors, the full hypothesis tree per
//! side with possibility verdicts, and the assembled candidates with their
//! short forms. This is the tool of first resort when a candidate list looks
//! wrong.

use std::fs::create_dir_all;
use std::path::PathBuf;

use crate::domain::Notation;
use crate::error::AppError;
use crate::parse::fields::{MinuteBranch, split_side};
use crate::parse::{ParseResult, anchor, combine, format as candidate_format};

/// Write the bundle and return its path.
pub fn write_debug_bundle(result: &ParseResult) -> Result<PathBuf, AppError> {
    let dir = PathBuf::from("debug");
    create_dir_all(&dir)
        .map_err(|e| AppError::structural(format!("Failed to create debug dir: {e}")))?;

    let stem = if result.digits.is_empty() {
        "empty".to_string()
    } else {
        result.digits.clone()
    };
    let path = dir.join(format!("shot_debug_{stem}.md"));

    let body = render_bundle(result);
    std::fs::write(&path, body)
        .map_err(|e| AppError::structural(format!("Failed to write debug bundle: {e}")))?;

    Ok(path)
}

fn render_bundle(result: &ParseResult) -> String {
    let mut out = String::new();

    out.push_str("# shot debug bundle\n");
    out.push_str(&format!("- input: `{}`\n", result.raw_input));
    out.push_str(&format!("- digits: `{}`\n", result.digits));
    out.push_str(&format!("- canonical: `{}`\n", result.canonical));
    out.push_str(&format!("- anchors: {}\n", result.anchors_found));

    let digits = &result.digits;
    for a in anchor::find_anchors(digits) {
        out.push_str(&format!("\n## Anchor `{}` at {}\n", a.degrees, a.index));

        if !combine::latitude_admissible(digits) {
            out.push_str("Latitude degrees must start with 2, 3, or 4; anchor skipped.\n");
            continue;
        }

        let lat = split_side(&digits[0..2], &digits[2..a.index]);
        let lon = split_side(&a.degrees, &digits[a.index + 3..]);

        for (title, side) in [("Latitude", &lat), ("Longitude", &lon)] {
            out.push_str(&format!(
                "\n### {title}: degrees `{}`, rest `{}`\n",
                side.degrees, side.rest
            ));
            out.push_str("| branch | minute | rest | seconds |\n");
            out.push_str("| - | - | - | - |\n");
            write_branch_row(&mut out, "short", side.minute_short.as_ref(), false);
            write_branch_row(&mut out, "long", side.minute_long.as_ref(), true);
        }

        let set = combine::expand_anchor(digits, &a);
        for (notation, candidates) in [
            (Notation::Dd, &set.dd),
            (Notation::DMm, &set.dmm),
            (Notation::DMSs, &set.dmss),
        ] {
            out.push_str(&format!(
                "\n### Candidates: {} ({})\n",
                notation.display_name(),
                candidates.len()
            ));
            for c in candidates {
                out.push_str(&format!(
                    "- `{}` (short form `{}`)\n",
                    c.display,
                    candidate_format::short_form(c)
                ));
            }
        }
    }

    out
}

fn write_branch_row(out: &mut String, name: &str, branch: Option<&MinuteBranch>, long: bool) {
    let Some(branch) = branch else {
        out.push_str(&format!("| {name} | - | - | not possible |\n"));
        return;
    };

    let minute_note = if long && !(10..60).contains(&branch.minute.value_num()) {
        " (out of range)"
    } else {
        ""
    };

    let mut seconds = Vec::new();
    if let Some(s) = &branch.second_short {
        seconds.push(format!("{}.{}", s.value, s.fraction()));
    }
    if let Some(s) = &branch.second_long {
        let note = if s.value_num() >= 60 { " (out of range)" } else { "" };
        seconds.push(format!("{}.{}{note}", s.value, s.fraction()));
    }

    out.push_str(&format!(
        "| {name} | {}{minute_note} | {} | {} |\n",
        branch.minute.value,
        branch.minute.rest,
        seconds.join(", ")
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    #[test]
    fn bundle_lists_hypotheses_and_candidates() {
        let result = parse("395512012");
        let body = render_bundle(&result);
        assert!(body.contains("## Anchor `120` at 4"));
        assert!(body.contains("degrees `39`, rest `55`"));
        assert!(body.contains("39 deg 55.0 min N x 120 deg 12.0 min W"));
        assert!(body.contains("short form"));
    }

    #[test]
    fn bundle_notes_skipped_latitude() {
        let result = parse("59120");
        let body = render_bundle(&result);
        assert!(body.contains("anchor skipped"));
    }
}
