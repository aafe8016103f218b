use tracing::debug;

use crate::domain::ToolCatalog;
use crate::ports::{DefinitionSource, join_path};

/// Scan `<category>/<tool>/<tool>.yaml` two levels below the root.
///
/// Directories without their own-named definition are not tools, and
/// categories without tools are left out.
pub fn discover<D: DefinitionSource + ?Sized>(source: &D) -> ToolCatalog {
    let mut catalog = ToolCatalog::new();

    for category in source.list_dirs("") {
        for tool in source.list_dirs(&category) {
            let tool_dir = join_path(&category, &tool);
            if source.is_file(&join_path(&tool_dir, &format!("{}.yaml", tool))) {
                catalog.insert(category.as_str(), tool);
            } else {
                debug!(dir = %tool_dir, "skipping directory without a definition");
            }
        }
    }

    debug!(root = %source.describe(), "discovered tools");
    catalog
}
