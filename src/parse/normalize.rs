//! Input normalization.
//!
//! A parse pass consumes two projections of the operator's raw text:
//!
//! - the digit string: every non-digit character removed; all downstream
//!   field splitting operates on this
//! - the canonical form: the raw text reduced to a fixed alphabet, used only
//!   for match classification against each candidate's short form
//!
//! Empty input yields empty projections, which downstream stages treat as
//! "no candidates".

/// Project the raw input onto its decimal digits.
pub fn digit_string(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Reduce the raw input to the canonical comparison alphabet.
///
/// Lower-cases the text, turns the conventional latitude/longitude separator
/// `x` into a space, maps the apostrophe and double-quote unit marks to their
/// letter forms (`m`, `s`), collapses whitespace runs to a single space, and
/// trims the ends.
pub fn canonical_form(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for c in raw.chars() {
        let c = match c.to_ascii_lowercase() {
            'x' => ' ',
            '\'' => 'm',
            '"' => 's',
            other => other,
        };
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            if !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn digit_string_strips_everything_else() {
        assert_eq!(digit_string("39d 12.5m x 120"), "39125120");
        assert_eq!(digit_string(""), "");
        assert_eq!(digit_string("no digits"), "");
    }

    #[test]
    fn canonical_form_fixed_alphabet() {
        assert_eq!(canonical_form("39D120D"), "39d120d");
        assert_eq!(canonical_form("39 X 120"), "39 120");
        assert_eq!(canonical_form("39d12'30\" x 120d"), "39d12m30s 120d");
    }

    #[test]
    fn canonical_form_collapses_and_trims_whitespace() {
        assert_eq!(canonical_form("  39   120  "), "39 120");
        assert_eq!(canonical_form("39x120"), "39 120");
        assert_eq!(canonical_form(""), "");
    }
}
