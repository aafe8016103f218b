//! The configuration wizard: collect answers for a tool and render its template.

pub mod resolver;

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

use crate::app::AppContext;
use crate::app::services::definition_store::{self, LoadedDefinition};
use crate::domain::{
    AnswerMap, AnswerValue, AppError, GENERATION_TIMESTAMP_KEY, OUTPUT_PATH_KEY, ToolDefaults,
    format_message, post_processor_for,
};
use crate::ports::{
    DefinitionSource, FileSink, InteractiveIo, Notice, OverridesSource, Question,
    TemplateRenderer, WriteOutcome,
};

use resolver::Resolution;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DEFAULT_SUCCESS: &str = "Successfully created configuration file.";
const DEFAULT_ERROR: &str = "An unexpected error occurred: {e}";
const OUTPUT_PATH_PROMPT: &str = "Output file path";

/// Inputs for one wizard run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub tool: String,
    /// Output path; asked interactively when absent.
    pub output: Option<PathBuf>,
    /// Fixed generation time; the local clock when absent.
    pub generated_at: Option<NaiveDateTime>,
}

impl GenerateRequest {
    pub fn new<S: Into<String>>(tool: S) -> Self {
        Self { tool: tool.into(), output: None, generated_at: None }
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn generated_at(mut self, at: NaiveDateTime) -> Self {
        self.generated_at = Some(at);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Written { path: PathBuf, content: String },
    Cancelled(CancelReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Interrupt or end of input while prompting.
    UserAborted,
    /// No prompt produced an answer.
    NothingCollected,
    /// The definition did not parse, so nothing could be asked.
    DefinitionMalformed,
    /// The output file exists and the user kept it.
    OverwriteDeclined,
}

/// Run the wizard for `request.tool`.
///
/// Returns `DefinitionNotFound` when no definition matches. Template failures
/// surface as `Generation` errors carrying the definition's error message, and
/// nothing is written in that case.
pub fn execute<D, O, T>(
    ctx: &AppContext<D, O, T>,
    request: GenerateRequest,
    io: &mut dyn InteractiveIo,
    sink: &mut dyn FileSink,
) -> Result<GenerateOutcome, AppError>
where
    D: DefinitionSource,
    O: OverridesSource,
    T: TemplateRenderer,
{
    let tool = request.tool.as_str();
    let loaded = definition_store::load(ctx.definitions(), tool)?;
    if let Some(err) = &loaded.malformed {
        io.notify(Notice::Error(err.to_string()));
    }
    for finding in &loaded.diagnostics {
        io.notify(Notice::Warning(finding.clone()));
    }

    let overrides = ctx.overrides().load().for_tool(tool);
    let Some(mut answers) = collect_answers(ctx.renderer(), &loaded, tool, &overrides, io)? else {
        return Ok(cancelled(io, "Configuration cancelled.", CancelReason::UserAborted));
    };

    if answers.is_empty() {
        let reason = if loaded.malformed.is_some() {
            CancelReason::DefinitionMalformed
        } else {
            CancelReason::NothingCollected
        };
        return Ok(cancelled(io, "Configuration cancelled.", reason));
    }

    let default_output = loaded.definition.output_file_or_default(tool);
    let Some(output) = output_path(request.output, default_output, io)? else {
        return Ok(cancelled(io, "Configuration cancelled.", CancelReason::UserAborted));
    };

    post_processor_for(tool)(&mut answers);
    let generated_at = request.generated_at.unwrap_or_else(|| Local::now().naive_local());
    answers.insert(
        GENERATION_TIMESTAMP_KEY,
        AnswerValue::Text(generated_at.format(TIMESTAMP_FORMAT).to_string()),
    );
    answers.insert(OUTPUT_PATH_KEY, AnswerValue::Text(output.display().to_string()));

    let content = render(ctx, &loaded, tool, &answers)
        .map_err(|err| run_failure(loaded.definition.after.error.as_deref(), &answers, &err))?;

    if sink.write(&output, &content, io)? == WriteOutcome::Declined {
        return Ok(cancelled(io, "Operation cancelled by user.", CancelReason::OverwriteDeclined));
    }

    announce_success(&loaded, &answers, io);
    Ok(GenerateOutcome::Written { path: output, content })
}

/// Visit sections and prompts in document order. `None` when the user aborts.
fn collect_answers<T: TemplateRenderer + ?Sized>(
    renderer: &T,
    loaded: &LoadedDefinition,
    tool: &str,
    overrides: &ToolDefaults,
    io: &mut dyn InteractiveIo,
) -> Result<Option<AnswerMap>, AppError> {
    let definition = &loaded.definition;
    io.notify(Notice::Title(definition.title_or_default(tool)));
    if let Some(subtitle) = definition.heading.subtitle.clone().filter(|s| !s.is_empty()) {
        io.notify(Notice::Subtitle(subtitle));
    }

    let mut answers = AnswerMap::new();
    for section in &definition.sections {
        if let Some(title) = section.title.clone().filter(|t| !t.is_empty()) {
            io.notify(Notice::Section { title, subtitle: section.subtitle.clone() });
        }

        for spec in &section.prompts {
            match resolver::resolve(spec, &answers, overrides, renderer, io)? {
                Resolution::Answered(value) => answers.insert(spec.key.as_str(), value),
                Resolution::Skipped => debug!(key = %spec.key, "prompt skipped"),
                Resolution::Cancelled => return Ok(None),
            }
        }
    }

    Ok(Some(answers))
}

fn output_path(
    requested: Option<PathBuf>,
    default: String,
    io: &mut dyn InteractiveIo,
) -> Result<Option<PathBuf>, AppError> {
    if let Some(path) = requested {
        return Ok(Some(path));
    }

    let question =
        Question { text: OUTPUT_PATH_PROMPT, default: Some(&default), choices: &[], masked: false };
    let answer = io.ask(&question)?;
    Ok(answer.map(|raw| {
        let trimmed = raw.trim();
        PathBuf::from(if trimmed.is_empty() { default.as_str() } else { trimmed })
    }))
}

fn render<D, O, T>(
    ctx: &AppContext<D, O, T>,
    loaded: &LoadedDefinition,
    tool: &str,
    answers: &AnswerMap,
) -> Result<String, AppError>
where
    D: DefinitionSource,
    O: OverridesSource,
    T: TemplateRenderer,
{
    let source = definition_store::read_template(ctx.definitions(), tool, loaded)?;
    ctx.renderer().render_document(loaded.template_name(), &source, answers)
}

/// The definition's error message with `{e}` bound to `err`.
fn run_failure(template: Option<&str>, answers: &AnswerMap, err: &AppError) -> AppError {
    let mut context = answers.clone();
    context.insert("e", AnswerValue::Text(err.to_string()));

    let message = format_message(template.unwrap_or(DEFAULT_ERROR), &context)
        .or_else(|_| format_message(DEFAULT_ERROR, &context))
        .unwrap_or_else(|_| err.to_string());
    AppError::Generation { message }
}

fn announce_success(loaded: &LoadedDefinition, answers: &AnswerMap, io: &mut dyn InteractiveIo) {
    let after = &loaded.definition.after;
    let success = after.success.as_deref().unwrap_or(DEFAULT_SUCCESS);
    io.notify(Notice::Success(format_or_raw(success, answers)));

    for note in &after.notes {
        io.notify(Notice::Note(format_or_raw(note, answers)));
    }
}

fn format_or_raw(template: &str, answers: &AnswerMap) -> String {
    format_message(template, answers).unwrap_or_else(|err| {
        warn!(message = template, "message left unformatted: {}", err);
        template.to_string()
    })
}

fn cancelled(io: &mut dyn InteractiveIo, message: &str, reason: CancelReason) -> GenerateOutcome {
    io.notify(Notice::Cancelled(message.to_string()));
    GenerateOutcome::Cancelled(reason)
}
