use std::collections::{BTreeMap, BTreeSet};
use std::io;

use crate::domain::AppError;
use crate::ports::DefinitionSource;

/// In-memory definitions tree keyed by `/`-separated relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryDefinitionSource {
    files: BTreeMap<String, String>,
}

#[allow(dead_code)]
impl MemoryDefinitionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    /// Seed `<category>/<tool>/<tool>.yaml` and its `.j2` template.
    pub fn with_tool(self, category: &str, tool: &str, definition: &str, template: &str) -> Self {
        let dir = format!("{}/{}", category, tool);
        self.with_file(&format!("{}/{}.yaml", dir, tool), definition)
            .with_file(&format!("{}/{}.yaml.j2", dir, tool), template)
    }

    /// Paths below `dir`, relative to it.
    fn children<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.files.keys().filter_map(move |path| {
            if dir.is_empty() {
                Some(path.as_str())
            } else {
                path.strip_prefix(dir).and_then(|rest| rest.strip_prefix('/'))
            }
        })
    }
}

impl DefinitionSource for MemoryDefinitionSource {
    fn list_dirs(&self, dir: &str) -> Vec<String> {
        let names: BTreeSet<&str> =
            self.children(dir).filter_map(|rest| rest.split_once('/').map(|(d, _)| d)).collect();
        names.into_iter().map(str::to_string).collect()
    }

    fn list_files(&self, dir: &str) -> Vec<String> {
        self.children(dir).filter(|rest| !rest.contains('/')).map(str::to_string).collect()
    }

    fn is_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &str) -> Result<String, AppError> {
        self.files.get(path).cloned().ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path)))
        })
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
