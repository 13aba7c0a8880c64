// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod catalog;
mod fs;
mod resolver;

pub use catalog::BuilderCatalog;
pub use fs::FsModuleResolver;
pub use resolver::{ModuleResolver, QuiverModule};
