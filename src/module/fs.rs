// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_yaml::Value;

use crate::component::{ComponentDescriptor, ComponentKind};
use crate::errors::ModuleError;
use crate::module::{BuilderCatalog, ModuleResolver, QuiverModule};

const COMPONENTS_KEY: &str = "components";

/// One component entry in a module manifest.
///
/// # Example
/// ```yaml
/// components:
///   - name: test hello handler
///     type: simple_handler
///     input_type: text
///     output_type: text
///     handler_builder: hello
/// ```
#[derive(Debug, Deserialize)]
struct ManifestComponent {
    name: String,
    #[serde(rename = "type")]
    kind: ComponentKind,
    input_type: String,
    output_type: String,
    handler_builder: String,
}

#[derive(Debug, Deserialize)]
struct ModuleManifest {
    components: Vec<ManifestComponent>,
}

/// Default module resolver: a module is a YAML manifest on disk whose
/// `components` sequence declares the pluggable units, each naming a
/// builder implementation registered in the catalog.
pub struct FsModuleResolver {
    catalog: BuilderCatalog,
}

impl FsModuleResolver {
    pub fn new(catalog: BuilderCatalog) -> Self {
        Self { catalog }
    }

    /// A resolver backed by the built-in builder catalog
    pub fn with_builtins() -> Self {
        Self::new(BuilderCatalog::builtin())
    }
}

#[async_trait]
impl ModuleResolver for FsModuleResolver {
    async fn resolve(&self, path: &Path) -> Result<QuiverModule, ModuleError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ModuleError::Load {
                path: path.to_path_buf(),
                source,
            })?;

        let value: Value = serde_yaml::from_str(&content).map_err(|source| ModuleError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // A file without the component collection is not a quiver module,
        // regardless of whatever else it contains.
        let has_components = value
            .as_mapping()
            .is_some_and(|mapping| mapping.contains_key(&Value::from(COMPONENTS_KEY)));
        if !has_components {
            return Err(ModuleError::NotAQuiverModule {
                path: path.to_path_buf(),
            });
        }

        let manifest: ModuleManifest =
            serde_yaml::from_value(value).map_err(|source| ModuleError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut components = Vec::with_capacity(manifest.components.len());
        for entry in manifest.components {
            let builder = self.catalog.get(&entry.handler_builder).ok_or_else(|| {
                ModuleError::UnknownBuilder {
                    path: path.to_path_buf(),
                    component: entry.name.clone(),
                    builder: entry.handler_builder.clone(),
                }
            })?;

            components.push(ComponentDescriptor {
                name: entry.name,
                kind: entry.kind,
                input_type: entry.input_type,
                output_type: entry.output_type,
                builder: Arc::clone(builder),
            });
        }

        Ok(QuiverModule { components })
    }
}
