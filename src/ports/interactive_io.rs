use crate::domain::AppError;

/// One question put to the user.
#[derive(Debug, Clone, Copy)]
pub struct Question<'a> {
    pub text: &'a str,
    pub default: Option<&'a str>,
    pub choices: &'a [String],
    /// Suppress echo of the typed value.
    pub masked: bool,
}

/// User-facing output of a wizard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Title(String),
    Subtitle(String),
    Section { title: String, subtitle: Option<String> },
    /// A value was refused; the same question follows.
    Invalid(String),
    Error(String),
    Warning(String),
    Success(String),
    Note(String),
    Cancelled(String),
}

/// Port for interactive input and output.
///
/// `None` from a read means the user aborted (interrupt or end of input).
pub trait InteractiveIo {
    fn ask(&mut self, question: &Question<'_>) -> Result<Option<String>, AppError>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>, AppError>;

    fn notify(&mut self, notice: Notice);
}
