//! Match classification.
//!
//! A candidate earns a label by comparing its short form (see
//! [`format::short_form_side`](super::format::short_form_side)) against the
//! canonical form of the operator's input:
//!
//! - **Exact**: the canonical input equals the short form, either with the
//!   latitude/longitude boundary space or with the sides packed together
//!   (so input typed without any separator can still match exactly).
//! - **Close**: the same comparison succeeds only after unit-letter identity
//!   is discarded on both sides (every `d`/`m`/`s` collapses to one generic
//!   unit mark). The digit positions agree; the operator's unit marks do not.
//! - otherwise the candidate carries no label and is offered unranked.

use crate::domain::{Candidate, MatchLabel};
use crate::parse::format;

/// Classify one candidate against the canonical input form.
pub fn classify(candidate: &Candidate, canonical: &str) -> MatchLabel {
    if canonical.is_empty() {
        return MatchLabel::None;
    }

    let lat = format::short_form_side(candidate.notation, &candidate.latitude);
    let lon = format::short_form_side(candidate.notation, &candidate.longitude);

    if joined_eq(canonical, &lat, &lon) {
        return MatchLabel::Exact;
    }

    let loose = discard_unit_identity(canonical);
    if joined_eq(
        &loose,
        &discard_unit_identity(&lat),
        &discard_unit_identity(&lon),
    ) {
        return MatchLabel::Close;
    }

    MatchLabel::None
}

/// True if `canonical` equals the two sides joined by a single space, or
/// packed together with no separator at the boundary.
fn joined_eq(canonical: &str, lat: &str, lon: &str) -> bool {
    let Some(rest) = canonical.strip_prefix(lat) else {
        return false;
    };
    rest == lon || rest.strip_prefix(' ') == Some(lon)
}

/// Collapse every unit letter to one generic mark.
fn discard_unit_identity(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'd' | 'm' | 's' => 'u',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CandidateSide, Notation};
    use pretty_assertions::assert_eq;

    fn side(degrees: &str, minute: Option<&str>, rest: &str) -> CandidateSide {
        CandidateSide {
            degrees: degrees.to_string(),
            minute: minute.map(str::to_string),
            second: None,
            rest: rest.to_string(),
        }
    }

    fn candidate(notation: Notation, latitude: CandidateSide, longitude: CandidateSide) -> Candidate {
        let display = format::render(notation, &latitude, &longitude);
        Candidate {
            notation,
            anchor_index: 2,
            latitude,
            longitude,
            display,
        }
    }

    fn dd_candidate(lat_rest: &str, lon_rest: &str) -> Candidate {
        candidate(
            Notation::Dd,
            side("39", None, lat_rest),
            side("120", None, lon_rest),
        )
    }

    #[test]
    fn exact_with_no_separator() {
        assert_eq!(classify(&dd_candidate("", ""), "39d120d"), MatchLabel::Exact);
    }

    #[test]
    fn exact_with_separator() {
        assert_eq!(classify(&dd_candidate("", ""), "39d 120d"), MatchLabel::Exact);
    }

    #[test]
    fn close_when_unit_letters_disagree() {
        // Operator typed seconds marks where the candidate implies degrees.
        assert_eq!(classify(&dd_candidate("", ""), "39s120s"), MatchLabel::Close);
        assert_eq!(classify(&dd_candidate("", ""), "39m 120m"), MatchLabel::Close);
    }

    #[test]
    fn unlabeled_without_unit_marks() {
        assert_eq!(classify(&dd_candidate("", ""), "39120"), MatchLabel::None);
        assert_eq!(classify(&dd_candidate("", ""), "39 120"), MatchLabel::None);
        assert_eq!(classify(&dd_candidate("", ""), "39-120"), MatchLabel::None);
    }

    #[test]
    fn fraction_digits_must_line_up() {
        let c = dd_candidate("5", "");
        assert_eq!(classify(&c, "39.5d120d"), MatchLabel::Exact);
        assert_eq!(classify(&c, "39.5m 120m"), MatchLabel::Close);
        assert_eq!(classify(&c, "39.5d120.0d"), MatchLabel::None);
    }

    #[test]
    fn minute_candidate_against_typed_minutes() {
        let c = candidate(
            Notation::DMm,
            side("39", Some("12"), ""),
            side("120", Some("12"), ""),
        );
        assert_eq!(classify(&c, "39d12m120d12m"), MatchLabel::Exact);
        assert_eq!(classify(&c, "39d12s120d12s"), MatchLabel::Close);
        assert_eq!(classify(&c, "39d12120d12"), MatchLabel::None);
    }

    #[test]
    fn empty_canonical_never_labels() {
        assert_eq!(classify(&dd_candidate("", ""), ""), MatchLabel::None);
    }
}
