use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::{InteractiveIo, Notice, Question};

/// A question as it was put to [`ScriptedIo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskedQuestion {
    pub text: String,
    pub default: Option<String>,
    pub choices: Vec<String>,
    pub masked: bool,
}

/// Interactive I/O driven by a fixed script of replies.
///
/// Once the script runs out, every read behaves like end of input.
#[derive(Debug, Default)]
pub struct ScriptedIo {
    replies: VecDeque<String>,
    confirm_replies: VecDeque<bool>,
    asked: Vec<AskedQuestion>,
    confirmations: Vec<String>,
    notices: Vec<Notice>,
}

#[allow(dead_code)]
impl ScriptedIo {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { replies: replies.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn with_confirmations<I: IntoIterator<Item = bool>>(mut self, replies: I) -> Self {
        self.confirm_replies.extend(replies);
        self
    }

    pub fn asked(&self) -> &[AskedQuestion] {
        &self.asked
    }

    pub fn confirmations(&self) -> &[String] {
        &self.confirmations
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Replies left unconsumed.
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    pub fn invalid_messages(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter_map(|notice| match notice {
                Notice::Invalid(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl InteractiveIo for ScriptedIo {
    fn ask(&mut self, question: &Question<'_>) -> Result<Option<String>, AppError> {
        self.asked.push(AskedQuestion {
            text: question.text.to_string(),
            default: question.default.map(str::to_string),
            choices: question.choices.to_vec(),
            masked: question.masked,
        });
        Ok(self.replies.pop_front())
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<Option<bool>, AppError> {
        self.confirmations.push(message.to_string());
        Ok(self.confirm_replies.pop_front())
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
