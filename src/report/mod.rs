//! Reporting utilities: formatted terminal output for a parse run.

pub mod format;

pub use format::*;
