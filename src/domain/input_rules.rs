//! Validation and shaping of raw prompt input.

use std::fmt;

use regex::Regex;
use tracing::warn;

use super::answers::AnswerValue;
use super::definition::PromptSpec;

/// Why a value was refused. Always local to one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Required,
    Pattern(String),
    Choice(Vec<String>),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Required => write!(f, "This field is required."),
            Rejection::Pattern(pattern) => write!(f, "Input must match: {}", pattern),
            Rejection::Choice(choices) => write!(f, "Please select one of: {}", choices.join(", ")),
        }
    }
}

/// Checks applied to a prompt's collected value before it is accepted.
#[derive(Debug, Clone)]
pub struct InputRules {
    required: bool,
    pattern: Option<(String, Regex)>,
    choices: Vec<String>,
}

impl InputRules {
    pub fn for_prompt(spec: &PromptSpec) -> Self {
        let pattern = spec.regex.as_ref().and_then(|source| {
            // Anchored at the start only: `^\d` accepts "1abc".
            match Regex::new(&format!("^(?:{})", source)) {
                Ok(compiled) => Some((source.clone(), compiled)),
                Err(err) => {
                    warn!(key = %spec.key, pattern = %source, "ignoring invalid regex: {}", err);
                    None
                }
            }
        });

        Self { required: spec.required, pattern, choices: spec.choices.clone() }
    }

    /// Empty values only fail the `required` rule.
    pub fn check(&self, value: &str) -> Result<(), Rejection> {
        if value.is_empty() {
            return if self.required { Err(Rejection::Required) } else { Ok(()) };
        }

        if let Some((source, pattern)) = &self.pattern {
            if !pattern.is_match(value) {
                return Err(Rejection::Pattern(source.clone()));
            }
        }

        if !self.choices.is_empty() && !self.choices.iter().any(|choice| choice == value) {
            return Err(Rejection::Choice(self.choices.clone()));
        }

        Ok(())
    }
}

/// Split comma-separated input into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty()).map(str::to_string).collect()
}

/// Final answer for an accepted value.
pub fn shape(spec: &PromptSpec, raw: String) -> AnswerValue {
    if spec.is_list { AnswerValue::List(split_list(&raw)) } else { AnswerValue::Text(raw) }
}
