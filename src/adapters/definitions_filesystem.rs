use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::DefinitionSource;

/// Definitions read from a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemDefinitionSource {
    root: PathBuf,
}

impl FilesystemDefinitionSource {
    /// Create a source rooted at the given definitions directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative: &str) -> PathBuf {
        relative.split('/').filter(|part| !part.is_empty()).fold(self.root.clone(), |acc, part| {
            acc.join(part)
        })
    }

    fn entries(&self, dir: &str, want_dirs: bool) -> Vec<String> {
        let path = self.resolve(dir);
        let read_dir = match fs::read_dir(&path) {
            Ok(read_dir) => read_dir,
            Err(err) => {
                debug!(path = %path.display(), "cannot list definitions directory: {}", err);
                return Vec::new();
            }
        };

        let mut names: Vec<String> = read_dir
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir() == want_dirs)
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        names.sort();
        names
    }
}

impl DefinitionSource for FilesystemDefinitionSource {
    fn list_dirs(&self, dir: &str) -> Vec<String> {
        self.entries(dir, true)
    }

    fn list_files(&self, dir: &str) -> Vec<String> {
        self.entries(dir, false)
    }

    fn is_file(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    fn read(&self, path: &str) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
