// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use serde::Deserialize;

use crate::handler::HandleableBuilder;

/// Payload type accepted by the simple-handler installation adapter.
pub const TEXT_PAYLOAD_TYPE: &str = "text";

/// The kind of handleable a component's builder produces.
///
/// # Variants
/// * `SimpleHandler` - text-in, text-out; the installer wraps it with a
///   streamable adapter
/// * `StreamHandler` - operates on raw streamables directly
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    #[serde(alias = "simple handler")]
    SimpleHandler,
    #[serde(alias = "stream handler")]
    StreamHandler,
}

/// A declarative record describing one pluggable unit.
///
/// Descriptors are created by module resolution and consumed exactly once
/// by the component installer; they are not retained afterwards.
#[derive(Clone)]
pub struct ComponentDescriptor {
    /// Handler name components are installed and resolved under
    pub name: String,
    pub kind: ComponentKind,
    pub input_type: String,
    pub output_type: String,
    pub builder: Arc<dyn HandleableBuilder>,
}

impl std::fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("input_type", &self.input_type)
            .field("output_type", &self.output_type)
            .finish()
    }
}
