//! Plausibility filtering and per-anchor candidate assembly.
//!
//! For one anchor, each side expands into hypothesis sides at three depths:
//! exactly one degree-depth side, up to two minute-depth sides, up to four
//! second-depth sides. A notation's candidates are the cross product of the
//! surviving latitude and longitude sides at its depth; latitude and
//! longitude are independent, so a side with no surviving hypotheses kills
//! every pair at that depth.
//!
//! Bounds: a 1-digit field is always in range (< 10). A 2-digit minute must
//! be 10..=59; a 2-digit reading below 10 would duplicate the 1-digit
//! reading of the same digits. A 2-digit second must be < 60. Second-depth
//! sides additionally require their minute branch to survive.

use crate::domain::{Candidate, CandidateSide, FieldReading, Notation};
use crate::parse::anchor::Anchor;
use crate::parse::fields::{MinuteBranch, SideHypotheses, split_side};
use crate::parse::format;

/// All candidates contributed by a single anchor, per notation.
#[derive(Debug, Clone, Default)]
pub struct AnchorCandidates {
    pub dd: Vec<Candidate>,
    pub dmm: Vec<Candidate>,
    pub dmss: Vec<Candidate>,
}

/// Latitude degrees 20-49 north: the first digit must be 2, 3, or 4.
pub fn latitude_admissible(digits: &str) -> bool {
    matches!(digits.as_bytes().first(), Some(b'2' | b'3' | b'4'))
}

/// Expand one anchor into its candidates.
///
/// The caller has already checked [`latitude_admissible`].
pub fn expand_anchor(digits: &str, anchor: &Anchor) -> AnchorCandidates {
    let lat = split_side(&digits[0..2], &digits[2..anchor.index]);
    let lon = split_side(&anchor.degrees, &digits[anchor.index + 3..]);

    AnchorCandidates {
        dd: cross(
            Notation::Dd,
            anchor.index,
            &[degree_side(&lat)],
            &[degree_side(&lon)],
        ),
        dmm: cross(
            Notation::DMm,
            anchor.index,
            &minute_sides(&lat),
            &minute_sides(&lon),
        ),
        dmss: cross(
            Notation::DMSs,
            anchor.index,
            &second_sides(&lat),
            &second_sides(&lon),
        ),
    }
}

fn cross(
    notation: Notation,
    anchor_index: usize,
    lats: &[CandidateSide],
    lons: &[CandidateSide],
) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(lats.len() * lons.len());
    for lat in lats {
        for lon in lons {
            out.push(Candidate {
                notation,
                anchor_index,
                latitude: lat.clone(),
                longitude: lon.clone(),
                display: format::render(notation, lat, lon),
            });
        }
    }
    out
}

fn degree_side(h: &SideHypotheses) -> CandidateSide {
    CandidateSide {
        degrees: h.degrees.clone(),
        minute: None,
        second: None,
        rest: h.rest.clone(),
    }
}

/// Minute-depth sides, short reading first.
fn minute_sides(h: &SideHypotheses) -> Vec<CandidateSide> {
    let mut out = Vec::new();
    if let Some(branch) = &h.minute_short {
        out.push(minute_side(h, branch));
    }
    if let Some(branch) = &h.minute_long
        && minute_long_in_range(&branch.minute)
    {
        out.push(minute_side(h, branch));
    }
    out
}

fn minute_side(h: &SideHypotheses, branch: &MinuteBranch) -> CandidateSide {
    CandidateSide {
        degrees: h.degrees.clone(),
        minute: Some(branch.minute.value.clone()),
        second: None,
        rest: branch.minute.rest.clone(),
    }
}

/// Second-depth sides in fixed order: short-minute/short-second,
/// short-minute/long-second, long-minute/short-second, long-minute/long-second.
fn second_sides(h: &SideHypotheses) -> Vec<CandidateSide> {
    let mut out = Vec::new();
    for branch in [h.minute_short.as_ref(), h.minute_long.as_ref()]
        .into_iter()
        .flatten()
    {
        // A 1-digit minute is always in range; a 2-digit one must be checked.
        if branch.minute.value.len() == 2 && !minute_long_in_range(&branch.minute) {
            continue;
        }
        if let Some(second) = &branch.second_short {
            out.push(second_side(h, branch, second));
        }
        if let Some(second) = &branch.second_long
            && second.value_num() < 60
        {
            out.push(second_side(h, branch, second));
        }
    }
    out
}

fn second_side(h: &SideHypotheses, branch: &MinuteBranch, second: &FieldReading) -> CandidateSide {
    CandidateSide {
        degrees: h.degrees.clone(),
        minute: Some(branch.minute.value.clone()),
        second: Some(second.value.clone()),
        rest: second.rest.clone(),
    }
}

fn minute_long_in_range(minute: &FieldReading) -> bool {
    let v = minute.value_num();
    v > 9 && v < 60
}
