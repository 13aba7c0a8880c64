// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod descriptor;
mod installer;

pub use descriptor::{ComponentDescriptor, ComponentKind, TEXT_PAYLOAD_TYPE};
pub use installer::install_components;
