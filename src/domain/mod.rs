pub mod answers;
pub mod catalog;
pub mod definition;
pub mod error;
pub mod input_rules;
pub mod message;
pub mod overrides;
pub mod post_process;

pub use answers::{AnswerMap, AnswerValue, AnswersView, GENERATION_TIMESTAMP_KEY, OUTPUT_PATH_KEY};
pub use catalog::ToolCatalog;
pub use definition::{AfterMessages, Definition, DependencyGate, Heading, PromptSpec, Section};
pub use error::AppError;
pub use input_rules::{InputRules, Rejection};
pub use message::{FormatError, format_message};
pub use overrides::{GlobalDefaults, ToolDefaults};
pub use post_process::{PostProcessor, post_processor_for};
