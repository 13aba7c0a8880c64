// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use serde_yaml::Value;

use crate::handler::HandleableBuilder;

/// Reserved configuration key naming the default handler to run.
const MAIN_KEY: &str = "main";

/// The authoritative configuration for one command invocation.
///
/// A configuration is produced by merging zero or more fragments: plain
/// entries come from config files (arbitrary YAML values keyed by string),
/// while the handler-builder mapping is populated by component
/// installation. Builders cannot be represented as YAML values, so they
/// live in their own typed map rather than under a reserved entry key.
///
/// Once handed to the handler resolver the configuration is not mutated;
/// a fresh merge is produced per run.
#[derive(Clone, Default)]
pub struct Config {
    entries: HashMap<String, Value>,
    builders: HashMap<String, Arc<dyn HandleableBuilder>>,
}

impl Config {
    /// Create an empty configuration fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fragment from plain entries
    pub fn from_entries(entries: HashMap<String, Value>) -> Self {
        Self {
            entries,
            builders: HashMap::new(),
        }
    }

    /// Merge an ordered sequence of fragments into one configuration.
    ///
    /// Later fragments override earlier ones: for each top-level entry key
    /// (and each builder name) the last fragment that defines it wins.
    /// Replacement is shallow; values are never deep-merged. Callers
    /// control precedence purely through ordering.
    pub fn merge(fragments: Vec<Config>) -> Config {
        let mut merged = Config::new();
        for fragment in fragments {
            merged.entries.extend(fragment.entries);
            merged.builders.extend(fragment.builders);
        }
        merged
    }

    /// Look up a plain entry by key
    pub fn entry(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Set a plain entry
    pub fn set_entry(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Look up a handler builder by exact name
    pub fn builder(&self, name: &str) -> Option<&Arc<dyn HandleableBuilder>> {
        self.builders.get(name)
    }

    /// Register a handler builder under a name
    pub fn insert_builder(&mut self, name: impl Into<String>, builder: Arc<dyn HandleableBuilder>) {
        self.builders.insert(name.into(), builder);
    }

    /// Names of all registered handler builders
    pub fn builder_names(&self) -> impl Iterator<Item = &String> {
        self.builders.keys()
    }

    /// Number of registered handler builders
    pub fn builder_count(&self) -> usize {
        self.builders.len()
    }

    /// The default handler named by the reserved `main` entry, if present
    /// and a string
    pub fn main_handler(&self) -> Option<&str> {
        self.entry(MAIN_KEY).and_then(Value::as_str)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("entries", &self.entries)
            .field("builder_names", &self.builders.keys().collect::<Vec<_>>())
            .finish()
    }
}
