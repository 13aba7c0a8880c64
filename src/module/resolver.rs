// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;

use async_trait::async_trait;

use crate::component::ComponentDescriptor;
use crate::errors::ModuleError;

/// A resolved quiver module: the well-known component collection a module
/// must expose.
#[derive(Debug, Clone)]
pub struct QuiverModule {
    pub components: Vec<ComponentDescriptor>,
}

/// Turns a filesystem path into a quiver module.
///
/// The command driver only depends on this seam, so tests can substitute
/// synthetic resolvers and the default filesystem implementation stays
/// swappable.
#[async_trait]
pub trait ModuleResolver: Send + Sync {
    async fn resolve(&self, path: &Path) -> Result<QuiverModule, ModuleError>;
}
