//! Candidate rendering.
//!
//! Each notation has a fixed textual grammar; these strings are both what the
//! operator sees and what the marker builder re-parses, so the grammar here
//! and the one in `marker` must stay in lockstep.
//!
//! Latitude is always rendered as N and longitude as W; the sign flip for
//! west happens when markers are built, not here.

use crate::domain::{Candidate, CandidateSide, Notation};

/// Render one candidate in its notation's grammar.
pub fn render(notation: Notation, latitude: &CandidateSide, longitude: &CandidateSide) -> String {
    format!(
        "{} N x {} W",
        render_side(notation, latitude),
        render_side(notation, longitude)
    )
}

fn render_side(notation: Notation, side: &CandidateSide) -> String {
    match notation {
        Notation::Dd => format!("{}.{} deg", side.degrees, side.fraction()),
        Notation::DMm => format!(
            "{} deg {}.{} min",
            side.degrees,
            side.minute.as_deref().unwrap_or("0"),
            side.fraction()
        ),
        Notation::DMSs => format!(
            "{} deg {} min {}.{} sec",
            side.degrees,
            side.minute.as_deref().unwrap_or("0"),
            side.second.as_deref().unwrap_or("0"),
            side.fraction()
        ),
    }
}

/// The compact form used for match classification: digits and `d`/`m`/`s`
/// unit letters packed together, one string per side.
///
/// Fractions appear only when the operator actually supplied fraction digits;
/// an implied `.0` is omitted so that `39d120d` can match exactly.
pub fn short_form_side(notation: Notation, side: &CandidateSide) -> String {
    let frac = if side.rest.is_empty() {
        String::new()
    } else {
        format!(".{}", side.rest)
    };
    match notation {
        Notation::Dd => format!("{}{}d", side.degrees, frac),
        Notation::DMm => format!(
            "{}d{}{}m",
            side.degrees,
            side.minute.as_deref().unwrap_or("0"),
            frac
        ),
        Notation::DMSs => format!(
            "{}d{}m{}{}s",
            side.degrees,
            side.minute.as_deref().unwrap_or("0"),
            side.second.as_deref().unwrap_or("0"),
            frac
        ),
    }
}

/// The candidate's full short form with the latitude/longitude boundary
/// rendered as a single space.
pub fn short_form(candidate: &Candidate) -> String {
    format!(
        "{} {}",
        short_form_side(candidate.notation, &candidate.latitude),
        short_form_side(candidate.notation, &candidate.longitude)
    )
}
