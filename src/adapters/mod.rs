pub mod definitions_embedded;
pub mod definitions_filesystem;
pub mod file_sink_fs;
pub mod overrides_toml;
pub mod template_engine;
pub mod terminal_io;

pub use definitions_embedded::EmbeddedDefinitionSource;
pub use definitions_filesystem::FilesystemDefinitionSource;
pub use file_sink_fs::FilesystemFileSink;
pub use overrides_toml::TomlOverridesFile;
pub use template_engine::MiniJinjaRenderer;
pub use terminal_io::TerminalIo;
