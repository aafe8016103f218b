//! CLI Adapter.
//!
//! The command tree is built at startup from the discovered tools:
//! `scaffoldr <category> <tool> [generate|list]`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use tracing_subscriber::EnvFilter;

use crate::app::commands::generate::{CancelReason, GenerateOutcome};
use crate::app::config::{DEFINITIONS_ENV, LOG_ENV, Settings};
use crate::domain::{AppError, ToolCatalog};

const DEFINITIONS_FLAG: &str = "--definitions";

/// Entry point for the CLI.
pub fn run() {
    init_tracing();

    match dispatch(std::env::args_os().collect()) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr, filtered by `SCAFFOLDR_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn dispatch(args: Vec<OsString>) -> Result<i32, AppError> {
    // The tree depends on the definitions root, so it is located before clap parses.
    let settings = match Settings::resolve(definitions_flag(&args)) {
        Ok(settings) => settings,
        Err(err) => {
            if print_version_if_requested(&args)? {
                return Ok(0);
            }
            return Err(err);
        }
    };
    let catalog = crate::discover(&settings);

    let mut command = build_command(&catalog);
    let matches = command.clone().get_matches_from(args);

    let Some((category, category_matches)) = matches.subcommand() else {
        command.print_help()?;
        return Ok(0);
    };
    let Some((tool, tool_matches)) = category_matches.subcommand() else {
        if let Some(category_command) = command.find_subcommand_mut(category) {
            category_command.print_help()?;
        }
        return Ok(0);
    };

    match tool_matches.subcommand() {
        Some(("generate", generate_matches)) => run_generate(&settings, tool, generate_matches),
        _ => run_list(&settings, tool),
    }
}

fn run_generate(settings: &Settings, tool: &str, matches: &ArgMatches) -> Result<i32, AppError> {
    let output = matches.get_one::<PathBuf>("output").cloned();
    match crate::generate(settings, tool, output)? {
        GenerateOutcome::Written { .. } => Ok(0),
        GenerateOutcome::Cancelled(CancelReason::DefinitionMalformed) => Ok(1),
        GenerateOutcome::Cancelled(_) => Ok(0),
    }
}

fn run_list(settings: &Settings, tool: &str) -> Result<i32, AppError> {
    let listing = crate::list_fields(settings, tool)?;
    print!("{}", listing);
    Ok(0)
}

/// Answers `-v/--version` without a usable definitions root.
fn print_version_if_requested(args: &[OsString]) -> Result<bool, AppError> {
    match build_command(&ToolCatalog::new()).try_get_matches_from(args) {
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            err.print()?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Value of `--definitions` if present, in either `--definitions DIR` or `--definitions=DIR` form.
fn definitions_flag(args: &[OsString]) -> Option<PathBuf> {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let Some(text) = arg.to_str() else { continue };
        if text == "--" {
            break;
        }
        if text == DEFINITIONS_FLAG {
            return iter.next().map(PathBuf::from);
        }
        if let Some(value) = text.strip_prefix(DEFINITIONS_FLAG).and_then(|v| v.strip_prefix('=')) {
            return Some(PathBuf::from(value));
        }
    }
    None
}

fn build_command(catalog: &ToolCatalog) -> Command {
    let mut root = Command::new("scaffoldr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scaffold configuration files for DevOps tools from declarative definitions")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
        .arg(
            Arg::new("definitions")
                .long("definitions")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help(format!(
                    "Definitions directory [env: {}] (default: bundled definitions)",
                    DEFINITIONS_ENV
                )),
        );

    for category in catalog.categories() {
        let mut category_command = Command::new(category.to_string())
            .about(format!("Scaffolding for {} tools.", category));
        for tool in catalog.tools(category) {
            category_command = category_command.subcommand(tool_command(tool));
        }
        root = root.subcommand(category_command);
    }

    root
}

fn tool_command(tool: &str) -> Command {
    Command::new(tool.to_string())
        .about(format!("Manage {} scaffolding.", tool))
        .subcommand(
            Command::new("generate").about("Interactively generate a configuration file.").arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .value_name("PATH")
                    .value_parser(value_parser!(PathBuf))
                    .help("Write to PATH instead of asking for it"),
            ),
        )
        .subcommand(
            Command::new("list").about("List all configuration fields and global defaults."),
        )
}
