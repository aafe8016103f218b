use crate::domain::{GlobalDefaults, ToolDefaults};
use crate::ports::OverridesSource;

/// Overrides fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticOverrides {
    defaults: GlobalDefaults,
}

#[allow(dead_code)]
impl StaticOverrides {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_tool<'a, I>(mut self, tool: &str, values: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let defaults: ToolDefaults = values.into_iter().collect();
        self.defaults.insert(tool, defaults);
        self
    }
}

impl OverridesSource for StaticOverrides {
    fn load(&self) -> GlobalDefaults {
        self.defaults.clone()
    }
}
