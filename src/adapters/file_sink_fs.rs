use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{FileSink, InteractiveIo, WriteOutcome};

/// Writes generated output to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemFileSink;

impl FilesystemFileSink {
    pub fn new() -> Self {
        Self
    }
}

impl FileSink for FilesystemFileSink {
    fn write(
        &mut self,
        path: &Path,
        content: &str,
        io: &mut dyn InteractiveIo,
    ) -> Result<WriteOutcome, AppError> {
        if path.exists() {
            let question = format!("File '{}' already exists. Overwrite?", path.display());
            if io.confirm(&question, false)? != Some(true) {
                return Ok(WriteOutcome::Declined);
            }
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        debug!(path = %path.display(), bytes = content.len(), "wrote generated file");
        Ok(WriteOutcome::Written)
    }
}
