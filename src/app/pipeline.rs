//! Shared "parse pipeline" logic used by both CLI verbs.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! normalize -> anchors -> hypotheses -> candidates -> labels -> markers
//!
//! The CLI verbs then focus on presentation (candidate lists vs marker JSON).

use crate::domain::{MarkerRecord, RunConfig};
use crate::error::AppError;
use crate::marker::build_markers;
use crate::parse::{ParseResult, parse};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub result: ParseResult,
    pub markers: Vec<MarkerRecord>,
}

/// Execute the full pipeline and return the computed outputs.
///
/// Markers are always built from the parse result of this same call, so a
/// caller can never pair candidates with markers from a different input.
pub fn run_parse(config: &RunConfig) -> Result<RunOutput, AppError> {
    let mut result = parse(&config.raw_input);
    if let Some(only) = config.only {
        result.retain_notation(only);
    }
    let markers = build_markers(&result, &config.marker_name)?;
    Ok(RunOutput { result, markers })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::Notation;

    fn config(raw: &str) -> RunConfig {
        RunConfig {
            raw_input: raw.to_string(),
            marker_name: "X".to_string(),
            only: None,
            debug_bundle: false,
        }
    }

    #[test]
    fn markers_cover_every_candidate() {
        let run = run_parse(&config("395512012")).unwrap();
        let total =
            run.result.dd.len() + run.result.dmm.len() + run.result.dmss.len();
        assert_eq!(run.markers.len(), total);
    }

    #[test]
    fn notation_filter_restricts_markers() {
        let mut cfg = config("395512012");
        cfg.only = Some(Notation::Dd);
        let run = run_parse(&cfg).unwrap();
        assert_eq!(run.markers.len(), 1);
        assert!(run.result.dmm.is_empty() && run.result.dmss.is_empty());
    }

    #[test]
    fn empty_input_runs_clean() {
        let run = run_parse(&config("")).unwrap();
        assert!(run.result.is_empty());
        assert!(run.markers.is_empty());
    }
}
