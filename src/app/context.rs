use crate::ports::{DefinitionSource, OverridesSource, TemplateRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<D: DefinitionSource, O: OverridesSource, T: TemplateRenderer> {
    definitions: D,
    overrides: O,
    renderer: T,
}

impl<D: DefinitionSource, O: OverridesSource, T: TemplateRenderer> AppContext<D, O, T> {
    /// Create a new application context.
    pub fn new(definitions: D, overrides: O, renderer: T) -> Self {
        Self { definitions, overrides, renderer }
    }

    /// Get a reference to the definitions root.
    pub fn definitions(&self) -> &D {
        &self.definitions
    }

    /// Get a reference to the global defaults source.
    pub fn overrides(&self) -> &O {
        &self.overrides
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &T {
        &self.renderer
    }
}
