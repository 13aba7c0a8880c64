// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::builtin::{EchoBuilder, HelloBuilder};
use crate::handler::HandleableBuilder;

/// Registry of handler builder implementations, keyed by the name a
/// module manifest uses in its `handler_builder` field.
pub struct BuilderCatalog {
    builders: HashMap<String, Arc<dyn HandleableBuilder>>,
}

impl BuilderCatalog {
    /// An empty catalog
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// The catalog of built-in handler builders shipped with this crate
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.register("hello", Arc::new(HelloBuilder));
        catalog.register("echo", Arc::new(EchoBuilder));
        catalog
    }

    /// Register a builder implementation under a name; a repeated name
    /// replaces the previous registration
    pub fn register(&mut self, name: impl Into<String>, builder: Arc<dyn HandleableBuilder>) {
        self.builders.insert(name.into(), builder);
    }

    /// Look up a builder implementation by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn HandleableBuilder>> {
        self.builders.get(name)
    }

    /// List registered implementation names, sorted for stable output
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for BuilderCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for BuilderCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderCatalog")
            .field("names", &self.names())
            .finish()
    }
}
