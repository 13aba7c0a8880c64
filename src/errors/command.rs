// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Top-level errors for a single command invocation.

use thiserror::Error;

use crate::errors::{ConfigError, InstallError, ModuleError, PipeError, ResolveError};

/// The first failure encountered while driving a command invocation.
///
/// Each variant corresponds to one stage of the command pipeline; a failure
/// in any stage short-circuits all later stages. The bin translates this
/// into a non-zero exit status; the driver itself never terminates the
/// process.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No positional module-path argument was given
    #[error("module path is not specified as first argument")]
    MissingModulePath,

    /// Neither `--main` nor the merged configuration names a handler to run
    #[error("no main quiver component specified")]
    NoMainHandlerSpecified,

    /// Module resolution failed
    #[error(transparent)]
    Module(#[from] ModuleError),

    /// Component installation failed
    #[error(transparent)]
    Install(#[from] InstallError),

    /// Loading the config-file fragment failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Handler resolution failed
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Stream piping failed
    #[error(transparent)]
    Pipe(#[from] PipeError),
}
