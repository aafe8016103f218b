//! Locating and loading tool definitions from a definitions root.

use tracing::{debug, warn};

use crate::domain::{AppError, Definition};
use crate::ports::{DefinitionSource, join_path};

/// A definition together with where it came from.
#[derive(Debug)]
pub struct LoadedDefinition {
    pub definition: Definition,
    /// Relative path of the definition document.
    pub path: String,
    /// Relative path of the co-located output template.
    pub template_path: String,
    /// Parse failure; `definition` is empty when set.
    pub malformed: Option<AppError>,
    pub diagnostics: Vec<String>,
}

impl LoadedDefinition {
    /// File name of the output template, which selects its escaping.
    pub fn template_name(&self) -> &str {
        self.template_path.rsplit('/').next().unwrap_or(&self.template_path)
    }
}

/// Find `<tool>.yaml` anywhere under the root, case-insensitively.
///
/// Each directory's own files are checked before its subdirectories, and
/// siblings are visited in lexicographic order.
pub fn locate<D: DefinitionSource + ?Sized>(source: &D, tool: &str) -> Option<String> {
    let wanted = format!("{}.yaml", tool.to_lowercase());
    locate_in(source, "", &wanted)
}

fn locate_in<D: DefinitionSource + ?Sized>(source: &D, dir: &str, wanted: &str) -> Option<String> {
    if let Some(file) = source.list_files(dir).into_iter().find(|f| f.to_lowercase() == wanted) {
        return Some(join_path(dir, &file));
    }
    source.list_dirs(dir).iter().find_map(|sub| locate_in(source, &join_path(dir, sub), wanted))
}

/// Load the definition for `tool`.
///
/// A document that does not parse still loads, as an empty definition with
/// `malformed` set.
pub fn load<D: DefinitionSource + ?Sized>(
    source: &D,
    tool: &str,
) -> Result<LoadedDefinition, AppError> {
    let path = locate(source, tool)
        .ok_or_else(|| AppError::DefinitionNotFound { tool: tool.to_string() })?;
    debug!(tool, path = %path, root = %source.describe(), "loading definition");

    let content = source.read(&path)?;
    let (definition, malformed) = match Definition::from_yaml(&content) {
        Ok(definition) => (definition, None),
        Err(err) => {
            let error =
                AppError::DefinitionMalformed { path: path.clone(), details: err.to_string() };
            warn!("{}", error);
            (Definition::default(), Some(error))
        }
    };

    let diagnostics = definition.diagnostics();
    for finding in &diagnostics {
        debug!(tool, "{}", finding);
    }

    let template_path = format!("{}.j2", path);
    Ok(LoadedDefinition { definition, path, template_path, malformed, diagnostics })
}

/// Read the output template that sits next to a loaded definition.
pub fn read_template<D: DefinitionSource + ?Sized>(
    source: &D,
    tool: &str,
    loaded: &LoadedDefinition,
) -> Result<String, AppError> {
    if !source.is_file(&loaded.template_path) {
        return Err(AppError::TemplateNotFound {
            tool: tool.to_string(),
            path: loaded.template_path.clone(),
        });
    }
    source.read(&loaded.template_path)
}
