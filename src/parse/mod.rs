//! The coordinate-guessing pipeline.
//!
//! `parse` is the single entry point: a pure, synchronous function from the
//! operator's raw text to three ordered candidate lists (one per notation)
//! with match labels attached. The result is the union over every anchor of
//! that anchor's candidates, in ascending anchor order; parsing the same
//! input twice yields identical results.
//!
//! Stages, leaves first:
//!
//! - [`normalize`]: digit projection + canonical comparison form
//! - [`anchor`]: overlapping longitude-degree window scan
//! - [`fields`]: minute/second hypothesis derivation per side
//! - [`combine`]: plausibility bounds + per-anchor cross products
//! - [`format`]: notation-grammar rendering
//! - [`matching`]: Exact/Close classification against the input

pub mod anchor;
pub mod combine;
pub mod fields;
pub mod format;
pub mod matching;
pub mod normalize;

use crate::domain::{Candidate, LabeledCandidate, Notation};

/// An anchor that was found but contributed nothing, and why.
///
/// These are expected conditions, reported rather than raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAnchor {
    pub index: usize,
    pub degrees: String,
    pub reason: String,
}

/// Everything one parse pass produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub raw_input: String,
    pub digits: String,
    pub canonical: String,
    /// Number of longitude-degree windows found (zero means the whole input
    /// yielded nothing, an informational condition).
    pub anchors_found: usize,
    pub dd: Vec<LabeledCandidate>,
    pub dmm: Vec<LabeledCandidate>,
    pub dmss: Vec<LabeledCandidate>,
    pub skipped: Vec<SkippedAnchor>,
}

impl ParseResult {
    pub fn by_notation(&self, notation: Notation) -> &[LabeledCandidate] {
        match notation {
            Notation::Dd => &self.dd,
            Notation::DMm => &self.dmm,
            Notation::DMSs => &self.dmss,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dd.is_empty() && self.dmm.is_empty() && self.dmss.is_empty()
    }

    /// Drop every list except `notation`'s. Presentation filter; the parse
    /// itself always computes all three notations.
    pub fn retain_notation(&mut self, notation: Notation) {
        for n in Notation::ALL {
            if n != notation {
                self.by_notation_mut(n).clear();
            }
        }
    }

    fn by_notation_mut(&mut self, notation: Notation) -> &mut Vec<LabeledCandidate> {
        match notation {
            Notation::Dd => &mut self.dd,
            Notation::DMm => &mut self.dmm,
            Notation::DMSs => &mut self.dmss,
        }
    }
}

/// Expand the raw input into every plausible coordinate interpretation.
pub fn parse(raw: &str) -> ParseResult {
    let digits = normalize::digit_string(raw);
    let canonical = normalize::canonical_form(raw);
    let anchors = anchor::find_anchors(&digits);

    let mut dd = Vec::new();
    let mut dmm = Vec::new();
    let mut dmss = Vec::new();
    let mut skipped = Vec::new();

    for a in &anchors {
        if !combine::latitude_admissible(&digits) {
            skipped.push(SkippedAnchor {
                index: a.index,
                degrees: a.degrees.clone(),
                reason: "latitude degrees must start with 2, 3, or 4".to_string(),
            });
            continue;
        }
        let set = combine::expand_anchor(&digits, a);
        dd.extend(label_all(set.dd, &canonical));
        dmm.extend(label_all(set.dmm, &canonical));
        dmss.extend(label_all(set.dmss, &canonical));
    }

    ParseResult {
        raw_input: raw.to_string(),
        digits,
        canonical,
        anchors_found: anchors.len(),
        dd,
        dmm,
        dmss,
        skipped,
    }
}

fn label_all(candidates: Vec<Candidate>, canonical: &str) -> Vec<LabeledCandidate> {
    candidates
        .into_iter()
        .map(|candidate| {
            let label = matching::classify(&candidate, canonical);
            LabeledCandidate { candidate, label }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchLabel;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn displays(list: &[LabeledCandidate]) -> Vec<&str> {
        list.iter().map(|c| c.candidate.display.as_str()).collect()
    }

    fn labels_of(result: &ParseResult, label: MatchLabel) -> Vec<String> {
        Notation::ALL
            .iter()
            .flat_map(|n| result.by_notation(*n))
            .filter(|c| c.label == label)
            .map(|c| c.candidate.display.clone())
            .collect()
    }

    #[test]
    fn bare_digits_yield_only_decimal_degrees() {
        let result = parse("39120");
        assert_eq!(displays(&result.dd), vec!["39.0 deg N x 120.0 deg W"]);
        assert_eq!(result.dmm.len(), 0);
        assert_eq!(result.dmss.len(), 0);
        assert_eq!(result.anchors_found, 1);
        // No delimiters typed, so not even the decimal-degrees candidate ranks.
        assert_eq!(labels_of(&result, MatchLabel::Exact), Vec::<String>::new());
    }

    #[test]
    fn degree_marks_make_the_candidate_exact() {
        let result = parse("39d120d");
        assert_eq!(displays(&result.dd), vec!["39.0 deg N x 120.0 deg W"]);
        assert_eq!(
            labels_of(&result, MatchLabel::Exact),
            vec!["39.0 deg N x 120.0 deg W"]
        );
    }

    #[test]
    fn full_precision_minutes_input() {
        let result = parse("39d12m120d12m");

        // Two anchors: "121" at index 2 and "120" at index 4.
        assert_eq!(result.anchors_found, 2);
        assert_eq!(
            displays(&result.dd),
            vec!["39.0 deg N x 121.2012 deg W", "39.12 deg N x 120.12 deg W"]
        );
        assert!(
            displays(&result.dmm).contains(&"39 deg 12.0 min N x 120 deg 12.0 min W"),
            "long/long minutes candidate missing: {:?}",
            displays(&result.dmm)
        );

        // Exactly one candidate matches the operator's delimiters exactly.
        assert_eq!(
            labels_of(&result, MatchLabel::Exact),
            vec!["39 deg 12.0 min N x 120 deg 12.0 min W"]
        );
    }

    #[test]
    fn separator_variants_still_match() {
        let result = parse("39d12m x 120d12m");
        assert_eq!(
            labels_of(&result, MatchLabel::Exact),
            vec!["39 deg 12.0 min N x 120 deg 12.0 min W"]
        );

        // Apostrophe is the minutes mark.
        let result = parse("39d12' x 120d12'");
        assert_eq!(
            labels_of(&result, MatchLabel::Exact),
            vec!["39 deg 12.0 min N x 120 deg 12.0 min W"]
        );
    }

    #[test]
    fn mismatched_unit_marks_rank_close() {
        // Seconds marks where the surviving reading implies minutes: digit
        // positions agree, delimiter kind does not.
        let result = parse("39d12s120d12s");
        assert_eq!(labels_of(&result, MatchLabel::Exact), Vec::<String>::new());
        assert_eq!(
            labels_of(&result, MatchLabel::Close),
            vec!["39 deg 12.0 min N x 120 deg 12.0 min W"]
        );
    }

    #[test]
    fn full_precision_seconds_input() {
        let result = parse("39d12m30s x 120d11m22s");
        assert_eq!(
            labels_of(&result, MatchLabel::Exact),
            vec!["39 deg 12 min 30.0 sec N x 120 deg 11 min 22.0 sec W"]
        );
    }

    #[test]
    fn latitude_precondition_failure_is_reported_not_fatal() {
        let result = parse("59120");
        assert!(result.is_empty());
        assert_eq!(result.anchors_found, 1);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].degrees, "120");
    }

    #[test]
    fn no_anchor_means_empty_lists() {
        let result = parse("394567");
        assert!(result.is_empty());
        assert_eq!(result.anchors_found, 0);
        assert_eq!(result.skipped.len(), 0);
    }

    #[test]
    fn candidates_accumulate_across_anchors() {
        // Anchors at index 2 ("121") and 4 ("120").
        let result = parse("3912120");
        assert_eq!(
            displays(&result.dd),
            vec!["39.0 deg N x 121.20 deg W", "39.12 deg N x 120.0 deg W"]
        );
    }

    /// True if the digit string has an admissible longitude window at
    /// index >= 2 (checked directly, independent of the anchor scanner).
    fn has_window(digits: &[u8]) -> bool {
        digits.windows(3).enumerate().any(|(i, w)| {
            i >= 2 && w[0] == b'1' && (b'0'..=b'2').contains(&w[1]) && w[2].is_ascii_digit()
        })
    }

    proptest! {
        #[test]
        fn no_window_no_candidates(digits in "[0-9]{0,12}") {
            if !has_window(digits.as_bytes()) {
                let result = parse(&digits);
                prop_assert!(result.is_empty());
            }
        }

        #[test]
        fn bad_first_digit_no_candidates(digits in "[0156789][0-9]{0,11}") {
            let result = parse(&digits);
            prop_assert!(result.is_empty());
        }

        #[test]
        fn parse_is_deterministic(raw in "[0-9dmsx' \"]{0,14}") {
            prop_assert_eq!(parse(&raw), parse(&raw));
        }
    }
}
