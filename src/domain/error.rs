use std::io;

use thiserror::Error;

/// Library-wide error type for scaffoldr operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No definition document matches the requested tool.
    #[error("Tool '{tool}' definition not found.")]
    DefinitionNotFound { tool: String },

    /// A definition document exists but could not be parsed.
    #[error("Could not parse definition file {path}: {details}")]
    DefinitionMalformed { path: String, details: String },

    /// The output template next to a definition is missing.
    #[error("Template '{path}' for tool '{tool}' is missing.")]
    TemplateNotFound { tool: String, path: String },

    /// Template evaluation failed.
    #[error("Failed to render template '{template}': {details}")]
    TemplateRender { template: String, details: String },

    /// Terminal interaction failed for a reason other than user interruption.
    #[error("Failed to read input: {0}")]
    Interaction(String),

    /// Run-level failure, already formatted for the user.
    #[error("{message}")]
    Generation { message: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::DefinitionNotFound { .. } | AppError::TemplateNotFound { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::Configuration(_)
            | AppError::DefinitionMalformed { .. }
            | AppError::TemplateRender { .. } => io::ErrorKind::InvalidData,
            AppError::Interaction(_) | AppError::Generation { .. } => io::ErrorKind::Other,
        }
    }
}
