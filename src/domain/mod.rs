//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the three coordinate notations (`Notation`) and match labels (`MatchLabel`)
//! - structured candidate pieces (`FieldReading`, `CandidateSide`, `Candidate`)
//! - marker output records (`MarkerRecord`, `PostedMarker`)
//! - the resolved run configuration (`RunConfig`)

pub mod types;

pub use types::*;
