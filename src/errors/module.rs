// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for module resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a module path into a quiver module
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The module file could not be read from disk
    #[error("failed to load module '{path}'")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The module file is not valid YAML
    #[error("failed to parse module '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The resolved module does not expose the expected component collection
    #[error("module '{path}' is not a quiver module")]
    NotAQuiverModule { path: PathBuf },

    /// A component references a handler builder implementation that is not
    /// registered in the builder catalog
    #[error("module '{path}' references unknown handler builder '{builder}' for component '{component}'")]
    UnknownBuilder {
        path: PathBuf,
        component: String,
        builder: String,
    },
}
