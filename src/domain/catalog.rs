//! Discovery-time view of available tools.

use std::collections::{BTreeMap, BTreeSet};

/// Category to sorted tool names. Categories without tools are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolCatalog {
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<C: Into<String>, T: Into<String>>(&mut self, category: C, tool: T) {
        self.categories.entry(category.into()).or_default().insert(tool.into());
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn tools(&self, category: &str) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|tools| tools.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
