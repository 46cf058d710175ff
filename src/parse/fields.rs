//! Minute/second field hypothesis derivation.
//!
//! After the degree fields are fixed by an anchor, each side of the split
//! leaves a remainder of digits that may encode minutes and seconds. Whole
//! minutes and whole seconds can each be read as one digit or two, so a
//! remainder expands into up to two minute branches, each carrying up to two
//! second readings. One generic routine derives the whole tree for a side;
//! it runs identically for latitude and longitude.
//!
//! A reading that cannot be taken (remainder too short) is simply absent.
//! The one exception is the implied zero: when a minute was read and no
//! digits remain, the seconds are an implied `0` with an empty fraction
//! source rather than "not possible". This changes which candidates exist,
//! not just their precision.

use crate::domain::FieldReading;

/// Second-depth readings derived from one minute branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinuteBranch {
    pub minute: FieldReading,
    pub second_short: Option<FieldReading>,
    pub second_long: Option<FieldReading>,
}

/// All minute/second hypotheses for one side of an anchor split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideHypotheses {
    /// The degree field (2 digits for latitude, 3 for longitude).
    pub degrees: String,
    /// Everything after the degree field; fraction source at degree depth.
    pub rest: String,
    pub minute_short: Option<MinuteBranch>,
    pub minute_long: Option<MinuteBranch>,
}

/// Expand one side's remainder into its full hypothesis tree.
pub fn split_side(degrees: &str, rest: &str) -> SideHypotheses {
    SideHypotheses {
        degrees: degrees.to_string(),
        rest: rest.to_string(),
        minute_short: minute_branch(rest, 1),
        minute_long: minute_branch(rest, 2),
    }
}

fn minute_branch(rest: &str, width: usize) -> Option<MinuteBranch> {
    if rest.len() < width {
        return None;
    }
    let minute = FieldReading::new(&rest[..width], &rest[width..]);
    let (second_short, second_long) = second_readings(&minute.rest);
    Some(MinuteBranch {
        minute,
        second_short,
        second_long,
    })
}

fn second_readings(remainder: &str) -> (Option<FieldReading>, Option<FieldReading>) {
    if remainder.is_empty() {
        // Implied zero: the minute was read, nothing remains for seconds.
        return (Some(FieldReading::new("0", "")), None);
    }
    let short = Some(FieldReading::new(&remainder[..1], &remainder[1..]));
    let long = (remainder.len() > 1).then(|| FieldReading::new(&remainder[..2], &remainder[2..]));
    (short, long)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reading(value: &str, rest: &str) -> FieldReading {
        FieldReading::new(value, rest)
    }

    #[test]
    fn empty_rest_has_no_minute_hypotheses() {
        let side = split_side("39", "");
        assert_eq!(side.minute_short, None);
        assert_eq!(side.minute_long, None);
        assert_eq!(side.rest, "");
    }

    #[test]
    fn single_digit_rest_implies_zero_seconds() {
        let side = split_side("39", "5");
        let short = side.minute_short.unwrap();
        assert_eq!(short.minute, reading("5", ""));
        assert_eq!(short.second_short, Some(reading("0", "")));
        assert_eq!(short.second_long, None);
        assert_eq!(side.minute_long, None);
    }

    #[test]
    fn two_digit_rest_expands_both_branches() {
        let side = split_side("39", "12");

        let short = side.minute_short.unwrap();
        assert_eq!(short.minute, reading("1", "2"));
        assert_eq!(short.second_short, Some(reading("2", "")));
        assert_eq!(short.second_long, None);

        let long = side.minute_long.unwrap();
        assert_eq!(long.minute, reading("12", ""));
        // Long branch consumed everything: implied zero seconds.
        assert_eq!(long.second_short, Some(reading("0", "")));
        assert_eq!(long.second_long, None);
    }

    #[test]
    fn deep_rest_keeps_fraction_sources() {
        let side = split_side("39", "12345");

        let short = side.minute_short.unwrap();
        assert_eq!(short.minute, reading("1", "2345"));
        assert_eq!(short.second_short, Some(reading("2", "345")));
        assert_eq!(short.second_long, Some(reading("23", "45")));

        let long = side.minute_long.unwrap();
        assert_eq!(long.minute, reading("12", "345"));
        assert_eq!(long.second_short, Some(reading("3", "45")));
        assert_eq!(long.second_long, Some(reading("34", "5")));
    }
}
