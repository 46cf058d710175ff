//! Marker record construction.
//!
//! Labeled candidates become structured `MarkerRecord`s by re-parsing each
//! formatted candidate string against its notation's grammar. The formatter
//! is the sole producer of these strings, so a re-parse failure is an
//! internal contract violation and aborts marker building with a structural
//! error rather than emitting a wrong coordinate.
//!
//! Labels follow the `{name}_{tag}{index}` scheme: the notation tag is always
//! present, the 1-based index only when that notation produced more than one
//! candidate. Exact and Close matches override the per-notation dot color
//! with the distinct `ring` / `target` styles.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{LabeledCandidate, MarkerRecord, MatchLabel, Notation};
use crate::error::AppError;
use crate::parse::ParseResult;

/// Fallback marker base name when the operator leaves it blank.
pub const DEFAULT_MARKER_NAME: &str = "X";

static DD_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\.(\d+) deg N x (\d+)\.(\d+) deg W$").expect("valid pattern")
});
static DMM_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+) deg (\d+)\.(\d+) min N x (\d+) deg (\d+)\.(\d+) min W$")
        .expect("valid pattern")
});
static DMSS_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+) deg (\d+) min (\d+)\.(\d+) sec N x (\d+) deg (\d+) min (\d+)\.(\d+) sec W$")
        .expect("valid pattern")
});

/// Build marker records for every candidate of a parse result.
pub fn build_markers(result: &ParseResult, base_name: &str) -> Result<Vec<MarkerRecord>, AppError> {
    let name = if base_name.trim().is_empty() {
        DEFAULT_MARKER_NAME
    } else {
        base_name.trim()
    };

    let mut records = Vec::new();
    for notation in Notation::ALL {
        let list = result.by_notation(notation);
        let indexed = list.len() > 1;
        for (i, labeled) in list.iter().enumerate() {
            records.push(build_one(labeled, name, i + 1, indexed)?);
        }
    }
    Ok(records)
}

fn build_one(
    labeled: &LabeledCandidate,
    name: &str,
    index: usize,
    indexed: bool,
) -> Result<MarkerRecord, AppError> {
    let notation = labeled.candidate.notation;
    let display = &labeled.candidate.display;
    let (latitude, west_degrees) = reparse(notation, display)?;

    let label = if indexed {
        format!("{name}_{}{index}", notation.label_tag())
    } else {
        format!("{name}_{}", notation.label_tag())
    };

    let style_code = match labeled.label {
        MatchLabel::Exact => "ring".to_string(),
        MatchLabel::Close => "target".to_string(),
        MatchLabel::None => notation.base_style_code().to_string(),
    };

    Ok(MarkerRecord {
        label,
        latitude,
        longitude: -west_degrees,
        style_code,
        match_label: labeled.label,
        notation,
        source: display.clone(),
    })
}

/// Recover (latitude, west-longitude magnitude) from a formatted candidate.
pub fn reparse(notation: Notation, display: &str) -> Result<(f64, f64), AppError> {
    let grammar = match notation {
        Notation::Dd => &DD_GRAMMAR,
        Notation::DMm => &DMM_GRAMMAR,
        Notation::DMSs => &DMSS_GRAMMAR,
    };
    let caps = grammar.captures(display).ok_or_else(|| {
        AppError::structural(format!(
            "Candidate '{display}' does not match the {} grammar.",
            notation.display_name()
        ))
    })?;

    let num = |i: usize| -> f64 { caps[i].parse().unwrap_or(0.0) };
    let frac = |whole: usize, part: usize| -> f64 {
        format!("{}.{}", &caps[whole], &caps[part])
            .parse()
            .unwrap_or(0.0)
    };

    let (lat, lon) = match notation {
        Notation::Dd => (frac(1, 2), frac(3, 4)),
        Notation::DMm => (num(1) + frac(2, 3) / 60.0, num(4) + frac(5, 6) / 60.0),
        Notation::DMSs => (
            num(1) + num(2) / 60.0 + frac(3, 4) / 3600.0,
            num(5) + num(6) / 60.0 + frac(7, 8) / 3600.0,
        ),
    };
    Ok((lat, lon))
}
