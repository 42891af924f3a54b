use crate::domain::ProjectLayout;
use crate::ports::{AppGenerator, ProjectStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: AppGenerator, S: ProjectStore> {
    layout: ProjectLayout,
    generator: G,
    store: S,
}

impl<G: AppGenerator, S: ProjectStore> AppContext<G, S> {
    /// Create a new application context.
    pub fn new(layout: ProjectLayout, generator: G, store: S) -> Self {
        Self { layout, generator, store }
    }

    /// Get the fixed project layout.
    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Get a reference to the app generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Get a reference to the project store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
