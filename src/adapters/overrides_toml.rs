use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::domain::GlobalDefaults;
use crate::ports::OverridesSource;

/// Global defaults read from a TOML file, normally `$HOME/.scaffoldr`.
#[derive(Debug, Clone)]
pub struct TomlOverridesFile {
    path: Option<PathBuf>,
}

impl TomlOverridesFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl OverridesSource for TomlOverridesFile {
    fn load(&self) -> GlobalDefaults {
        let Some(path) = &self.path else {
            debug!("no global defaults location; using none");
            return GlobalDefaults::default();
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "global defaults file not present");
                return GlobalDefaults::default();
            }
            Err(err) => {
                warn!(path = %path.display(), "cannot read global defaults: {}", err);
                return GlobalDefaults::default();
            }
        };

        GlobalDefaults::from_toml_str(&content).unwrap_or_else(|err| {
            warn!(path = %path.display(), "ignoring malformed global defaults: {}", err);
            GlobalDefaults::default()
        })
    }
}
