// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::path::Path;

use serde_yaml::Value;

use crate::config::Config;
use crate::errors::ConfigError;

/// Load a configuration fragment from a YAML file.
///
/// The file must contain a top-level mapping with string keys; the values
/// are kept as-is and become plain configuration entries. An empty file
/// yields an empty fragment.
///
/// # Example
/// ```yaml
/// main: "test hello handler"
/// greet: howdy
/// ```
pub async fn load_config_fragment(path: &Path) -> Result<Config, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let value: Value = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Mapping(mapping) => {
            let mut entries = HashMap::with_capacity(mapping.len());
            for (key, entry) in mapping {
                match key {
                    Value::String(key) => {
                        entries.insert(key, entry);
                    }
                    _ => {
                        return Err(ConfigError::NonStringKey {
                            path: path.to_path_buf(),
                        })
                    }
                }
            }
            Ok(Config::from_entries(entries))
        }
        // An empty document deserializes to null; treat it as no overrides.
        Value::Null => Ok(Config::new()),
        _ => Err(ConfigError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}
