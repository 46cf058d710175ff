//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and resolves the run configuration
//! - runs the parse pipeline
//! - prints the candidate report or the marker JSON
//! - writes the optional debug bundle

use clap::Parser;

use crate::cli::{Command, ParseArgs};
use crate::domain::{PostedMarker, RunConfig};
use crate::error::AppError;
use crate::marker::DEFAULT_MARKER_NAME;

pub mod pipeline;

/// Entry point for the `shot` binary.
pub fn run() -> Result<(), AppError> {
    // We want `shot 39d120d` to behave like `shot parse 39d120d`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the quick-entry UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Parse(args) => handle_parse(args, OutputMode::Lists),
        Command::Markers(args) => handle_parse(args, OutputMode::Markers),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Lists,
    Markers,
}

fn handle_parse(args: ParseArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let run = pipeline::run_parse(&config)?;

    match mode {
        OutputMode::Lists => {
            println!(
                "{}",
                crate::report::format_run_summary(&run.result, &config)
            );
            println!("{}", crate::report::format_candidate_lists(&run.result));
        }
        OutputMode::Markers => {
            let posted: Vec<PostedMarker> = run.markers.iter().map(|m| m.to_posted()).collect();
            let json = serde_json::to_string_pretty(&posted)
                .map_err(|e| AppError::structural(format!("Failed to serialize markers: {e}")))?;
            println!("{json}");
        }
    }

    if config.debug_bundle {
        let path = crate::debug::write_debug_bundle(&run.result)?;
        eprintln!("debug bundle: {}", path.display());
    }

    Ok(())
}

/// Resolve the run configuration from CLI flags plus `.env` defaults.
pub fn run_config_from_args(args: &ParseArgs) -> RunConfig {
    dotenvy::dotenv().ok();
    let default_name =
        std::env::var("SHOT_MARKER_NAME").unwrap_or_else(|_| DEFAULT_MARKER_NAME.to_string());

    RunConfig {
        raw_input: args.numbers.clone(),
        marker_name: args.name.clone().unwrap_or(default_name),
        only: args.only,
        debug_bundle: args.debug_bundle,
    }
}

/// Rewrite argv so a bare digit string defaults to the `parse` subcommand.
///
/// Rules:
/// - `shot`                      -> unchanged (clap prints the usage error)
/// - `shot 39d120d`              -> `shot parse 39d120d`
/// - `shot parse/markers ...`    -> unchanged
/// - `shot --help/--version/-h`  -> unchanged (top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "parse" | "markers");
    if is_subcommand {
        return argv;
    }

    argv.insert(1, "parse".to_string());
    argv
}
