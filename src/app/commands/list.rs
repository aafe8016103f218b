//! Field listing for a tool: prompts grouped by section, next to the user's global defaults.

use std::fmt;

use crate::app::AppContext;
use crate::app::services::definition_store;
use crate::domain::{AppError, definition::title_case};
use crate::ports::{DefinitionSource, OverridesSource, TemplateRenderer};

const NO_DESCRIPTION: &str = "No description provided.";
const UNTITLED_SECTION: &str = "Other";
const HEADERS: [&str; 4] = ["Field", "Global Default", "Required", "Description"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldListing {
    pub title: String,
    pub sections: Vec<FieldSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSection {
    pub title: String,
    pub fields: Vec<FieldRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub key: String,
    pub global_default: Option<String>,
    pub required: bool,
    pub description: String,
}

/// Build the field listing for `tool`. A definition that does not parse is an error here.
pub fn execute<D, O, T>(ctx: &AppContext<D, O, T>, tool: &str) -> Result<FieldListing, AppError>
where
    D: DefinitionSource,
    O: OverridesSource,
    T: TemplateRenderer,
{
    let loaded = definition_store::load(ctx.definitions(), tool)?;
    if let Some(err) = loaded.malformed {
        return Err(err);
    }
    let defaults = ctx.overrides().load().for_tool(tool);

    let sections = loaded
        .definition
        .sections
        .iter()
        .map(|section| FieldSection {
            title: section
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNTITLED_SECTION.to_string()),
            fields: section
                .prompts
                .iter()
                .map(|prompt| FieldRow {
                    key: if prompt.key.is_empty() { "N/A".to_string() } else { prompt.key.clone() },
                    global_default: defaults.get(&prompt.key).map(str::to_string),
                    required: prompt.required,
                    description: prompt
                        .description
                        .clone()
                        .filter(|d| !d.is_empty())
                        .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                })
                .collect(),
        })
        .collect();

    Ok(FieldListing { title: format!("Configuration Fields for {}", title_case(tool)), sections })
}

impl FieldRow {
    fn cells(&self) -> [&str; 4] {
        [
            self.key.as_str(),
            self.global_default.as_deref().unwrap_or("None"),
            if self.required { "Yes" } else { "No" },
            self.description.as_str(),
        ]
    }
}

/// Plain-text table, one block per section.
impl fmt::Display for FieldListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths = HEADERS.map(str::len);
        for row in self.sections.iter().flat_map(|s| s.fields.iter()) {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let rule: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);

        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        write_row(f, HEADERS, widths)?;
        writeln!(f, "{}", "-".repeat(rule))?;

        for section in &self.sections {
            writeln!(f, "{}", section.title)?;
            for row in &section.fields {
                write_row(f, row.cells(), widths)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: [&str; 4], widths: [usize; 4]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{}", line.trim_end())
}
