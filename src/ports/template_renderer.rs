use crate::domain::{AnswerMap, AnswersView, AppError};

/// Trait for rendering templates.
///
/// Keeps the template engine (minijinja) out of the wizard logic.
pub trait TemplateRenderer {
    /// Render an inline template, such as a prompt default, without output escaping.
    fn render_inline(&self, template: &str, context: AnswersView<'_>) -> Result<String, AppError>;

    /// Render a named output template. Escaping follows the format implied by `name`.
    ///
    /// # Arguments
    /// * `name` - Template file name, e.g. `borgmatic.yaml.j2`.
    /// * `source` - Template text.
    /// * `answers` - Final answer map used as the binding context.
    fn render_document(
        &self,
        name: &str,
        source: &str,
        answers: &AnswerMap,
    ) -> Result<String, AppError>;
}
