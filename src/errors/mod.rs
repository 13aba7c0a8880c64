// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod command;
mod config;
mod module;
mod pipe;
mod resolve;

pub use command::CommandError;
pub use config::{ConfigError, InstallError};
pub use module::ModuleError;
pub use pipe::PipeError;
pub use resolve::ResolveError;
