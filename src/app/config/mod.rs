//! Process-level settings: where definitions and global defaults live.

mod settings;

pub use settings::{
    DEFINITIONS_DIR_NAME, DEFINITIONS_ENV, DefinitionsLocation, LOG_ENV, OVERRIDES_FILE_NAME,
    Settings,
};
