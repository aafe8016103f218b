//! Answers collected during a wizard run.

use std::collections::BTreeMap;

use serde::Serialize;

/// Context key holding the wall-clock time of generation.
pub const GENERATION_TIMESTAMP_KEY: &str = "generation_timestamp";

/// Context key holding the resolved output path.
pub const OUTPUT_PATH_KEY: &str = "output_path";

/// A single resolved answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    List(Vec<String>),
}

impl AnswerValue {
    pub fn text<S: Into<String>>(value: S) -> Self {
        AnswerValue::Text(value.into())
    }

    /// The string form, if this answer is not a list.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(value) => Some(value),
            AnswerValue::List(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(value) => value.is_empty(),
            AnswerValue::List(items) => items.is_empty(),
        }
    }

    /// Human-readable form; list items are joined with `", "`.
    pub fn display(&self) -> String {
        match self {
            AnswerValue::Text(value) => value.clone(),
            AnswerValue::List(items) => items.join(", "),
        }
    }
}

/// Prompt key to answer, built in prompt order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerMap {
    entries: BTreeMap<String, AnswerValue>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, value: AnswerValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Read-only view over the answers collected so far.
    pub fn view(&self) -> AnswersView<'_> {
        AnswersView { entries: &self.entries }
    }
}

impl<K: Into<String>> FromIterator<(K, AnswerValue)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (K, AnswerValue)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(key, value)| (key.into(), value)).collect() }
    }
}

/// Borrowed, immutable snapshot of an [`AnswerMap`].
///
/// Default-value templates and dependency gates only ever see this view, so
/// they can read earlier answers but never insert or change one.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct AnswersView<'a> {
    entries: &'a BTreeMap<String, AnswerValue>,
}

impl<'a> AnswersView<'a> {
    pub fn get(&self, key: &str) -> Option<&'a AnswerValue> {
        self.entries.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(AnswerValue::as_text)
    }
}
