//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the parsing pipeline itself.

use clap::{Parser, Subcommand};

use crate::domain::Notation;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "shot",
    version,
    about = "Expand an ambiguous digit string into every plausible lat/lon reading"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the three candidate lists with match labels.
    Parse(ParseArgs),
    /// Print marker records for every candidate as posting-shape JSON.
    Markers(ParseArgs),
}

/// Common options for parsing and marker building.
#[derive(Debug, Parser, Clone)]
pub struct ParseArgs {
    /// The coordinate text as typed: digits plus optional delimiters
    /// (space, x, d, m, s, ', ").
    pub numbers: String,

    /// Marker base name. Falls back to SHOT_MARKER_NAME from the
    /// environment/.env, then to "X".
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Restrict output to one notation (dd, dmm, dmss).
    #[arg(long, value_enum)]
    pub only: Option<Notation>,

    /// Write a markdown debug bundle under debug/.
    #[arg(long)]
    pub debug_bundle: bool,
}
