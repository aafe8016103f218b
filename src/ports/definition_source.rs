//! Read-only access to a definitions root.

use crate::domain::AppError;

/// A tree of definition documents and templates.
///
/// Paths are relative to the root and `/`-separated; `""` is the root itself.
pub trait DefinitionSource {
    /// Names of the immediate subdirectories of `dir`, sorted.
    fn list_dirs(&self, dir: &str) -> Vec<String>;

    /// Names of the files directly inside `dir`, sorted.
    fn list_files(&self, dir: &str) -> Vec<String>;

    fn is_file(&self, path: &str) -> bool;

    fn read(&self, path: &str) -> Result<String, AppError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

impl<T: DefinitionSource + ?Sized> DefinitionSource for Box<T> {
    fn list_dirs(&self, dir: &str) -> Vec<String> {
        (**self).list_dirs(dir)
    }

    fn list_files(&self, dir: &str) -> Vec<String> {
        (**self).list_files(dir)
    }

    fn is_file(&self, path: &str) -> bool {
        (**self).is_file(path)
    }

    fn read(&self, path: &str) -> Result<String, AppError> {
        (**self).read(path)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Join a relative directory and a child name.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() { name.to_string() } else { format!("{}/{}", dir, name) }
}
