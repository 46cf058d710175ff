//! Longitude-degree anchor search.
//!
//! An anchor is any 3-digit window of the digit string reading as a longitude
//! in the 100-129 W band. The scan starts at index 2 (the first two digits
//! are reserved for latitude degrees) and is overlapping: a digit may
//! participate in more than one anchor, and every admissible window is
//! processed independently.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longitude degrees 100..=129.
static LON_DEGREES: Lazy<Regex> = Lazy::new(|| Regex::new("1[0-2][0-9]").expect("valid pattern"));

/// A longitude-degree window within the digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Start index of the window within the digit string.
    pub index: usize,
    /// The 3-digit longitude-degree value.
    pub degrees: String,
}

/// Find every anchor in ascending start-index order.
///
/// The regex crate yields non-overlapping matches, so the scan restarts one
/// past each match start instead of past its end.
pub fn find_anchors(digits: &str) -> Vec<Anchor> {
    let mut anchors = Vec::new();
    let mut start = 2;
    while start <= digits.len() {
        let Some(m) = LON_DEGREES.find_at(digits, start) else {
            break;
        };
        anchors.push(Anchor {
            index: m.start(),
            degrees: m.as_str().to_string(),
        });
        start = m.start() + 1;
    }
    anchors
}
