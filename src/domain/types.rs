//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while expanding digit strings into candidates
//! - rendered to the terminal report
//! - handed to external marker sinks as structured records

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Coordinate display notation.
///
/// Every parse produces one candidate list per notation; the lists are
/// independent and a single digit string routinely yields candidates in all
/// three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Decimal degrees (`39.0 deg N x 120.0 deg W`).
    #[value(name = "dd")]
    Dd,
    /// Degrees + decimal minutes (`39 deg 12.0 min N x ...`).
    #[value(name = "dmm")]
    DMm,
    /// Degrees + minutes + decimal seconds (`39 deg 12 min 0.0 sec N x ...`).
    #[value(name = "dmss")]
    DMSs,
}

impl Notation {
    pub const ALL: [Notation; 3] = [Notation::Dd, Notation::DMm, Notation::DMSs];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Notation::Dd => "decimal degrees",
            Notation::DMm => "degrees + decimal minutes",
            Notation::DMSs => "degrees + minutes + seconds",
        }
    }

    /// Tag embedded in marker labels (`X_Dd2`, `X_DMm`, ...).
    pub fn label_tag(self) -> &'static str {
        match self {
            Notation::Dd => "Dd",
            Notation::DMm => "DMm",
            Notation::DMSs => "DMSs",
        }
    }

    /// Default marker style code (colored dot) for this notation.
    pub fn base_style_code(self) -> &'static str {
        match self {
            Notation::Dd => "#FF0000",
            Notation::DMm => "#FF00FF",
            Notation::DMSs => "#0000FF",
        }
    }

    /// GPX waypoint symbol keyed off the notation.
    pub fn gpx_symbol(self) -> &'static str {
        match self {
            Notation::Dd => "circle",
            Notation::DMm => "diamond",
            Notation::DMSs => "square",
        }
    }
}

/// How closely a candidate's implied delimiter placement matches what the
/// operator actually typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLabel {
    /// No relationship established; the candidate is still offered, unranked.
    #[default]
    None,
    /// Digit placement agrees with the input but the unit letters differ.
    Close,
    /// Canonical forms are character-identical.
    Exact,
}

impl MatchLabel {
    /// Short marker appended to report lines (`[exact]`, `[close]`, nothing).
    pub fn report_suffix(self) -> &'static str {
        match self {
            MatchLabel::None => "",
            MatchLabel::Close => "  [close]",
            MatchLabel::Exact => "  [exact]",
        }
    }
}

/// One reading of a minute or second field: the whole-value digits plus the
/// unconsumed remainder that supplies its decimal fraction.
///
/// `rest` may be empty; the rendered fraction then defaults to `"0"`. The
/// empty source is preserved (rather than stored as `"0"`) because match
/// classification must distinguish "operator typed nothing here" from
/// "operator typed a zero".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReading {
    pub value: String,
    pub rest: String,
}

impl FieldReading {
    pub fn new(value: impl Into<String>, rest: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            rest: rest.into(),
        }
    }

    /// The whole-field value as an integer. Values are at most two digits.
    pub fn value_num(&self) -> u32 {
        self.value.parse().unwrap_or(0)
    }

    /// Digits rendered right of the decimal point (`"0"` when nothing remains).
    pub fn fraction(&self) -> &str {
        if self.rest.is_empty() { "0" } else { &self.rest }
    }
}

/// One side (latitude or longitude) of an assembled candidate, carrying the
/// fields down to the depth of its notation.
///
/// For decimal degrees both `minute` and `second` are `None` and `rest` feeds
/// the degree fraction; for minute notation `rest` feeds the minute fraction;
/// for second notation it feeds the second fraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSide {
    pub degrees: String,
    pub minute: Option<String>,
    pub second: Option<String>,
    pub rest: String,
}

impl CandidateSide {
    /// Digits rendered right of the decimal point on the deepest component.
    pub fn fraction(&self) -> &str {
        if self.rest.is_empty() { "0" } else { &self.rest }
    }
}

/// One fully assembled coordinate interpretation for one notation.
///
/// `display` is the notation-grammar rendering; the structured sides are kept
/// alongside it for match classification and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub notation: Notation,
    /// Start index of the longitude-degree window within the digit string.
    pub anchor_index: usize,
    pub latitude: CandidateSide,
    pub longitude: CandidateSide,
    pub display: String,
}

/// A candidate plus its classification against the operator's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledCandidate {
    pub candidate: Candidate,
    pub label: MatchLabel,
}

/// Structured marker record handed to external sinks.
///
/// Latitude is signed decimal degrees, north positive; longitude is signed
/// decimal degrees, west negative. `source` is the formatted candidate string
/// the record was re-parsed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerRecord {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub style_code: String,
    pub match_label: MatchLabel,
    pub notation: Notation,
    pub source: String,
}

impl MarkerRecord {
    /// The JSON object handed to the marker-posting collaborator.
    pub fn to_posted(&self) -> PostedMarker {
        PostedMarker {
            label: self.label.clone(),
            folder_id: None,
            url: self.style_code.clone(),
            comments: String::new(),
            position: PostedPosition {
                lat: self.latitude,
                lng: self.longitude,
            },
        }
    }

    /// Waypoint name for the file-writing collaborator.
    pub fn gpx_name(&self) -> &str {
        &self.label
    }

    /// Waypoint description: the formatted candidate this record came from.
    pub fn gpx_description(&self) -> &str {
        &self.source
    }

    /// Waypoint symbol, keyed off the notation encoded in the label.
    pub fn gpx_symbol(&self) -> &'static str {
        self.notation.gpx_symbol()
    }
}

/// The JSON shape consumed by the marker-posting collaborator.
///
/// This crate only guarantees the shape; it never performs the POST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostedMarker {
    pub label: String,
    #[serde(rename = "folderId")]
    pub folder_id: Option<String>,
    pub url: String,
    pub comments: String,
    pub position: PostedPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostedPosition {
    pub lat: f64,
    pub lng: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags plus optional `.env` defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The operator's coordinate text, exactly as typed.
    pub raw_input: String,
    /// Base name for marker labels.
    pub marker_name: String,
    /// Restrict output to a single notation.
    pub only: Option<Notation>,
    /// Write a markdown debug bundle for this run.
    pub debug_bundle: bool,
}
