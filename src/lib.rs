//! scaffoldr: generate configuration files for third-party tools from declarative definitions.
//!
//! A definition describes the prompts of a configuration wizard. The answers
//! collected from the user are rendered into the template that sits next to
//! the definition.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::path::PathBuf;

use adapters::{FilesystemFileSink, MiniJinjaRenderer, TerminalIo, TomlOverridesFile};
use app::{
    AppContext,
    commands::{generate, list},
};

pub use app::commands::generate::{CancelReason, GenerateOutcome, GenerateRequest};
pub use app::commands::list::{FieldListing, FieldRow, FieldSection};
pub use app::config::{DefinitionsLocation, Settings};
pub use domain::{AppError, ToolCatalog};

type CliContext =
    AppContext<Box<dyn ports::DefinitionSource>, TomlOverridesFile, MiniJinjaRenderer>;

fn context(settings: &Settings) -> CliContext {
    AppContext::new(settings.definitions.open(), settings.overrides(), MiniJinjaRenderer::new())
}

/// Tools available under the configured definitions root, by category.
pub fn discover(settings: &Settings) -> ToolCatalog {
    app::services::discover(&settings.definitions.open())
}

/// Run the interactive wizard for `tool` on the terminal.
///
/// # Arguments
/// * `settings` - Resolved definitions location and global defaults path
/// * `tool` - Tool name, matched case-insensitively
/// * `output` - Output file; asked for interactively when `None`
pub fn generate(
    settings: &Settings,
    tool: &str,
    output: Option<PathBuf>,
) -> Result<GenerateOutcome, AppError> {
    let ctx = context(settings);
    let mut io = TerminalIo::new();
    let mut sink = FilesystemFileSink::new();

    generate::execute(&ctx, GenerateRequest::new(tool).with_output(output), &mut io, &mut sink)
}

/// Describe the fields of `tool` next to the user's global defaults.
pub fn list_fields(settings: &Settings, tool: &str) -> Result<FieldListing, AppError> {
    list::execute(&context(settings), tool)
}
