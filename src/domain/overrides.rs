//! User-level default overrides, keyed by tool name.

use std::collections::{BTreeMap, HashMap};

use toml::{Table, Value};
use tracing::debug;

/// Overrides for every tool, from the global defaults document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalDefaults {
    tools: HashMap<String, ToolDefaults>,
}

/// Prompt key to override value for one tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolDefaults {
    values: BTreeMap<String, String>,
}

impl GlobalDefaults {
    /// Parse a TOML document whose top-level tables are tool names.
    ///
    /// Scalar values are kept in string form and arrays are comma-joined.
    /// Nested tables and top-level non-table entries are ignored.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let table: Table = content.parse()?;
        let mut tools = HashMap::new();

        for (tool, value) in table {
            let Value::Table(entries) = value else {
                debug!(entry = %tool, "ignoring non-table entry in global defaults");
                continue;
            };
            let values =
                entries.iter().filter_map(|(key, v)| Some((key.clone(), toml_scalar(v)?)));
            let defaults: &mut ToolDefaults = tools.entry(tool.to_lowercase()).or_default();
            defaults.values.extend(values);
        }

        Ok(Self { tools })
    }

    pub fn insert<S: Into<String>>(&mut self, tool: S, defaults: ToolDefaults) {
        self.tools.insert(tool.into().to_lowercase(), defaults);
    }

    /// Overrides for `tool`, case-insensitively. Empty when none are defined.
    pub fn for_tool(&self, tool: &str) -> ToolDefaults {
        self.tools.get(&tool.to_lowercase()).cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolDefaults {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ToolDefaults {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

fn toml_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Integer(number) => Some(number.to_string()),
        Value::Float(number) => Some(number.to_string()),
        Value::Boolean(flag) => Some(flag.to_string()),
        Value::Datetime(datetime) => Some(datetime.to_string()),
        Value::Array(items) => {
            Some(items.iter().filter_map(toml_scalar).collect::<Vec<_>>().join(", "))
        }
        Value::Table(_) => None,
    }
}
