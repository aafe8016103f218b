//! Resolution of a single prompt: gate, default, input, validation, shaping.

use tracing::debug;

use crate::domain::input_rules::shape;
use crate::domain::{
    AnswerMap, AnswerValue, AnswersView, AppError, InputRules, PromptSpec, ToolDefaults,
};
use crate::ports::{InteractiveIo, Notice, Question, TemplateRenderer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Answered(AnswerValue),
    /// Gate closed or prompt unusable; the key stays out of the answers.
    Skipped,
    /// The user aborted input.
    Cancelled,
}

/// The default offered for `spec`: the user's global override, else the literal default.
///
/// Defaults containing template markup are rendered against the answers so
/// far. A default that fails to render is offered unrendered.
pub fn effective_default<T: TemplateRenderer + ?Sized>(
    spec: &PromptSpec,
    answers: AnswersView<'_>,
    overrides: &ToolDefaults,
    renderer: &T,
) -> Option<String> {
    let raw = overrides.get(&spec.key).map(str::to_string).or_else(|| spec.default.clone())?;
    if !raw.contains("{{") && !raw.contains("{%") {
        return Some(raw);
    }

    match renderer.render_inline(&raw, answers) {
        Ok(rendered) => Some(rendered),
        Err(err) => {
            debug!(key = %spec.key, "default left unrendered: {}", err);
            Some(raw)
        }
    }
}

pub fn resolve<T: TemplateRenderer + ?Sized>(
    spec: &PromptSpec,
    answers: &AnswerMap,
    overrides: &ToolDefaults,
    renderer: &T,
    io: &mut dyn InteractiveIo,
) -> Result<Resolution, AppError> {
    if spec.key.is_empty() || !spec.depends_on.is_open(answers.view()) {
        return Ok(Resolution::Skipped);
    }

    let default = effective_default(spec, answers.view(), overrides, renderer);
    let rules = InputRules::for_prompt(spec);
    let question = Question {
        text: spec.display_text(),
        default: default.as_deref(),
        choices: &spec.choices,
        masked: spec.is_password,
    };

    loop {
        let Some(raw) = io.ask(&question)? else {
            return Ok(Resolution::Cancelled);
        };
        let value = if raw.is_empty() { default.clone().unwrap_or_default() } else { raw };

        match rules.check(&value) {
            Ok(()) => return Ok(Resolution::Answered(shape(spec, value))),
            Err(rejection) => io.notify(Notice::Invalid(rejection.to_string())),
        }
    }
}
