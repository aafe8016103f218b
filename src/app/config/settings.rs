use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapters::{EmbeddedDefinitionSource, FilesystemDefinitionSource, TomlOverridesFile};
use crate::domain::AppError;
use crate::ports::DefinitionSource;

/// Environment variable selecting the definitions directory.
pub const DEFINITIONS_ENV: &str = "SCAFFOLDR_DEFINITIONS";
/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SCAFFOLDR_LOG";
/// Global defaults file name under `$HOME`.
pub const OVERRIDES_FILE_NAME: &str = ".scaffoldr";
/// Directory probed next to the executable.
pub const DEFINITIONS_DIR_NAME: &str = "definitions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionsLocation {
    Directory(PathBuf),
    /// Definitions compiled into the binary.
    Bundled,
}

impl DefinitionsLocation {
    pub fn open(&self) -> Box<dyn DefinitionSource> {
        match self {
            DefinitionsLocation::Directory(path) => {
                Box::new(FilesystemDefinitionSource::new(path.clone()))
            }
            DefinitionsLocation::Bundled => Box::new(EmbeddedDefinitionSource::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub definitions: DefinitionsLocation,
    pub overrides_path: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings from the command line value and the process environment.
    pub fn resolve(definitions_flag: Option<PathBuf>) -> Result<Self, AppError> {
        let exe_dir = env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self::resolve_with(definitions_flag, |key| env::var_os(key), exe_dir.as_deref())
    }

    /// Precedence for definitions: flag, then `SCAFFOLDR_DEFINITIONS`, then a
    /// `definitions/` directory next to the executable, then the bundled set.
    /// An explicitly requested directory must exist.
    pub fn resolve_with<E>(
        definitions_flag: Option<PathBuf>,
        env_var: E,
        exe_dir: Option<&Path>,
    ) -> Result<Self, AppError>
    where
        E: Fn(&str) -> Option<OsString>,
    {
        let explicit = definitions_flag
            .or_else(|| non_empty(env_var(DEFINITIONS_ENV)).map(PathBuf::from));

        let definitions = match explicit {
            Some(dir) if dir.is_dir() => DefinitionsLocation::Directory(dir),
            Some(dir) => {
                return Err(AppError::config_error(format!(
                    "Definitions directory not found: {}",
                    dir.display()
                )));
            }
            None => match exe_dir.map(|dir| dir.join(DEFINITIONS_DIR_NAME)) {
                Some(sibling) if sibling.is_dir() => DefinitionsLocation::Directory(sibling),
                _ => DefinitionsLocation::Bundled,
            },
        };
        debug!(?definitions, "resolved definitions location");

        let overrides_path =
            non_empty(env_var("HOME")).map(|home| PathBuf::from(home).join(OVERRIDES_FILE_NAME));

        Ok(Self { definitions, overrides_path })
    }

    pub fn overrides(&self) -> TomlOverridesFile {
        TomlOverridesFile::new(self.overrides_path.clone())
    }
}

fn non_empty(value: Option<OsString>) -> Option<OsString> {
    value.filter(|v| !v.is_empty())
}
