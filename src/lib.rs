//! `scattershot` library crate.
//!
//! Given a run of digits (plus whatever delimiters the operator managed to
//! type), expand every plausible lat/lon interpretation in three notations,
//! rank each against the input's delimiter placement, and build the marker
//! records external sinks consume.
//!
//! The binary (`shot`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future GUI front-ends or services)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod debug;
pub mod domain;
pub mod error;
pub mod marker;
pub mod parse;
pub mod report;
