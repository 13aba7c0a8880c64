// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for config fragment loading and component installation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a config-file fragment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read from disk
    #[error("failed to read config file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML
    #[error("failed to parse config file '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The config file parsed, but its top level is not a mapping
    #[error("config file '{path}' is not a top-level mapping")]
    NotAMapping { path: PathBuf },

    /// A top-level key in the config file is not a string
    #[error("config file '{path}' contains a non-string top-level key")]
    NonStringKey { path: PathBuf },
}

/// Errors that can occur during component installation
#[derive(Debug, Error)]
pub enum InstallError {
    /// Two components in one installation share a name
    #[error("duplicate component name during installation: '{name}'")]
    DuplicateComponent { name: String },

    /// A simple handler component declared a payload type the installer
    /// cannot adapt to the streamable model
    #[error(
        "component '{name}' declares unsupported {direction} type '{declared}' \
         for a simple handler (only 'text' is supported)"
    )]
    UnsupportedPayloadType {
        name: String,
        direction: &'static str,
        declared: String,
    },
}
