mod definition_source;
mod file_sink;
mod interactive_io;
mod overrides_source;
mod template_renderer;

pub use definition_source::{DefinitionSource, join_path};
pub use file_sink::{FileSink, WriteOutcome};
pub use interactive_io::{InteractiveIo, Notice, Question};
pub use overrides_source::OverridesSource;
pub use template_renderer::TemplateRenderer;
