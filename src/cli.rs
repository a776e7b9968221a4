//! Command-line interface for fileorg.
//!
//! Handles argument parsing and drives a complete run:
//! - Permissive flag handling (unknown flags are dropped, not rejected)
//! - Loading exclusion settings
//! - Banner, run settings and the completion summary

use crate::config::{CompiledFilters, FilterConfig, RunConfig};
use crate::file_category::ExtensionTable;
use crate::file_organizer::{FileOrganizer, OrganizeReport};
use crate::output::OutputFormatter;
use clap::{CommandFactory, Parser};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Command-line arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(
    name = "fileorg",
    version,
    about = "Move files into category folders based on their extension",
    after_help = "Example:\n  fileorg ~/Downloads --log"
)]
pub struct Cli {
    /// Directory to organize
    pub directory: Option<PathBuf>,

    /// Scan subdirectories
    #[arg(long)]
    pub recursive: bool,

    /// Enable logging to logs/log.txt
    #[arg(long)]
    pub log: bool,

    /// Show what would be moved without moving anything
    #[arg(long)]
    pub dry_run: bool,

    /// Exclusion settings file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

const VALUE_FLAGS: &[&str] = &["--config"];
const SWITCHES: &[&str] = &["--recursive", "--log", "--dry-run", "--version", "-V"];

impl Cli {
    /// Parses arguments, silently ignoring anything unrecognised.
    ///
    /// Help is only honoured as the first argument. Exits the process for
    /// `--help`, `--version` and a `--config` without a value, like clap does.
    pub fn parse_permissive<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self::parse_from(retain_known_args(args))
    }

    /// Builds the run configuration, or `None` when no directory was given.
    pub fn run_config(&self) -> Option<RunConfig> {
        let directory = self.directory.as_ref()?;
        Some(
            RunConfig::new(directory)
                .recursive(self.recursive)
                .logging(self.log)
                .dry_run(self.dry_run),
        )
    }

    pub fn print_usage() {
        if let Err(e) = Self::command().print_help() {
            log::warn!("could not print help: {}", e);
        }
    }
}

/// Drops every argument clap would reject: unknown flags, extra positionals,
/// repeats of a flag already kept and a `--help` that is not the first argument.
pub fn retain_known_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut kept: Vec<String> = args.next().into_iter().collect();
    let mut seen_positional = false;
    let mut seen_flags: HashSet<String> = HashSet::new();
    let mut first = true;

    while let Some(arg) = args.next() {
        let is_first = std::mem::replace(&mut first, false);

        if arg == "--help" || arg == "-h" {
            if is_first {
                kept.push(arg);
            }
        } else if SWITCHES.contains(&arg.as_str()) {
            if seen_flags.insert(arg.clone()) {
                kept.push(arg);
            }
        } else if VALUE_FLAGS.contains(&arg.as_str()) {
            let value = args.next();
            if seen_flags.insert(arg.clone()) {
                kept.push(arg);
                kept.extend(value);
            }
        } else if let Some(flag) = VALUE_FLAGS
            .iter()
            .find(|flag| arg.starts_with(&format!("{flag}=")))
        {
            if seen_flags.insert((*flag).to_string()) {
                kept.push(arg);
            }
        } else if arg.starts_with('-') && arg != "-" {
            log::debug!("ignoring unrecognised argument {arg}");
        } else if !seen_positional {
            seen_positional = true;
            kept.push(arg);
        }
    }

    kept
}

/// Loads exclusion settings and runs the organizer.
///
/// # Arguments
///
/// * `config` - The run configuration built from the command line
/// * `settings_path` - Optional explicit settings file
pub fn run_cli(config: &RunConfig, settings_path: Option<&Path>) -> Result<OrganizeReport, String> {
    let filters = FilterConfig::load(settings_path)
        .and_then(FilterConfig::compile)
        .map_err(|e| e.to_string())?;
    run_with_filters(config, filters)
}

/// Runs one organize pass with already compiled filters and prints the summary.
pub fn run_with_filters(
    config: &RunConfig,
    filters: CompiledFilters,
) -> Result<OrganizeReport, String> {
    OutputFormatter::banner();
    OutputFormatter::run_settings(config);

    let table = ExtensionTable::default();
    let report = FileOrganizer::new(&table, config)
        .with_filters(filters)
        .organize()
        .map_err(|e| e.to_string())?;

    println!();
    if config.dry_run {
        OutputFormatter::dry_run_notice("Dry run complete. No files were moved.");
    } else {
        OutputFormatter::success("Organization complete!");
        if config.logging {
            OutputFormatter::success(&format!("Log saved to: {}", config.log_file.display()));
        }
    }
    OutputFormatter::summary_table(&report);

    Ok(report)
}
