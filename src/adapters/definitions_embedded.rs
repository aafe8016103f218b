//! Definitions bundled into the binary.
//!
//! Used when no definitions directory is configured or found next to the
//! executable.

use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::DefinitionSource;

static BUNDLED_DEFINITIONS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/definitions");

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDefinitionSource;

impl EmbeddedDefinitionSource {
    pub fn new() -> Self {
        Self
    }

    fn dir(&self, path: &str) -> Option<&'static Dir<'static>> {
        if path.is_empty() { Some(&BUNDLED_DEFINITIONS) } else { BUNDLED_DEFINITIONS.get_dir(path) }
    }
}

fn file_name(path: &std::path::Path) -> Option<String> {
    path.file_name().and_then(|name| name.to_str()).map(str::to_string)
}

impl DefinitionSource for EmbeddedDefinitionSource {
    fn list_dirs(&self, dir: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .dir(dir)
            .map(|d| d.dirs().filter_map(|sub| file_name(sub.path())).collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    fn list_files(&self, dir: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .dir(dir)
            .map(|d| d.files().filter_map(|file| file_name(file.path())).collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    fn is_file(&self, path: &str) -> bool {
        BUNDLED_DEFINITIONS.get_file(path).is_some()
    }

    fn read(&self, path: &str) -> Result<String, AppError> {
        let file = BUNDLED_DEFINITIONS.get_file(path).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("bundled definition file not found: {}", path),
            )
        })?;

        file.contents_utf8().map(str::to_string).ok_or_else(|| {
            AppError::config_error(format!("Bundled definition file is not valid UTF-8: {path}"))
        })
    }

    fn describe(&self) -> String {
        "<bundled definitions>".to_string()
    }
}
