//! `{name}` placeholder expansion for success, error, and note messages.

use thiserror::Error;

use super::answers::AnswerMap;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown placeholder '{{{0}}}'")]
    UnknownKey(String),
    #[error("unterminated placeholder starting at byte {0}")]
    Unterminated(usize),
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedClose(usize),
}

/// Expand `{name}` placeholders from `answers`. `{{` and `}}` are literal braces.
pub fn format_message(template: &str, answers: &AnswerMap) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template.char_indices().peekable();

    while let Some((index, ch)) = rest.next() {
        match ch {
            '{' if rest.peek().map(|(_, next)| *next) == Some('{') => {
                rest.next();
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match rest.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(FormatError::Unterminated(index)),
                    }
                }
                let key = name.trim();
                let value =
                    answers.get(key).ok_or_else(|| FormatError::UnknownKey(key.to_string()))?;
                out.push_str(&value.display());
            }
            '}' if rest.peek().map(|(_, next)| *next) == Some('}') => {
                rest.next();
                out.push('}');
            }
            '}' => return Err(FormatError::UnmatchedClose(index)),
            other => out.push(other),
        }
    }

    Ok(out)
}
