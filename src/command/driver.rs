// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::command::CommandArgs;
use crate::component::install_components;
use crate::config::{load_config_fragment, Config};
use crate::errors::CommandError;
use crate::handler::resolve_stream_handler;
use crate::module::{FsModuleResolver, ModuleResolver};
use crate::observability::messages::command::{
    ComponentsInstalled, HandlerResolved, ModuleResolved, PipeCompleted,
};
use crate::observability::messages::StructuredLog;
use crate::stream::pipe_through_handler;

/// Explicit process context for one command invocation.
///
/// The working directory and the module resolution mechanism are
/// parameters, not ambient globals, so the driver runs unchanged against
/// synthetic paths and resolvers in tests.
pub struct CommandContext {
    base_dir: PathBuf,
    resolver: Arc<dyn ModuleResolver>,
}

impl CommandContext {
    pub fn new(base_dir: PathBuf, resolver: Arc<dyn ModuleResolver>) -> Self {
        Self { base_dir, resolver }
    }

    /// A context rooted at `base_dir` using the filesystem resolver and
    /// the built-in builder catalog
    pub fn with_builtins(base_dir: PathBuf) -> Self {
        Self::new(base_dir, Arc::new(FsModuleResolver::with_builtins()))
    }

    /// Directory that relative module and config paths are joined against
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }
}

/// Drive one command invocation from parsed arguments to completed pipe.
///
/// The stages run in strict forward order, each awaited to completion
/// before the next begins: determine the module path, resolve the module,
/// install its components, merge configuration (installed defaults first,
/// config-file fragment as override), determine the main handler name
/// (`--main` wins over the merged `main` entry), resolve the handler, and
/// pipe `input` through it into `output`. The first failure
/// short-circuits every later stage and is returned as-is; translating it
/// into an exit status is the caller's job, which keeps the driver
/// host-agnostic.
pub async fn run_command<I, O>(
    args: &CommandArgs,
    ctx: &CommandContext,
    input: I,
    output: O,
) -> Result<(), CommandError>
where
    I: AsyncRead + Send + Unpin + 'static,
    O: AsyncWrite + Send + Unpin,
{
    let module_path = args.module_path().ok_or(CommandError::MissingModulePath)?;
    let module_path = ctx.base_dir.join(module_path);

    let module = ctx.resolver.resolve(&module_path).await?;
    ModuleResolved {
        path: &module_path,
        component_count: module.components.len(),
    }
    .log();

    let component_config = install_components(module.components)?;
    ComponentsInstalled {
        handler_count: component_config.builder_count(),
    }
    .log();

    let file_config = match args.config_path() {
        Some(path) => load_config_fragment(&ctx.base_dir.join(path)).await?,
        None => Config::new(),
    };

    // Installed components are defaults; the explicit config file is the
    // override.
    let config = Config::merge(vec![component_config, file_config]);

    let main_handler_name = args
        .main_handler()
        .or_else(|| config.main_handler())
        .map(str::to_string)
        .ok_or(CommandError::NoMainHandlerSpecified)?;

    let handler = resolve_stream_handler(&config, &main_handler_name).await?;
    HandlerResolved {
        name: &main_handler_name,
    }
    .log();

    let bytes_written = pipe_through_handler(handler.as_ref(), args, input, output).await?;
    PipeCompleted { bytes_written }.log();

    Ok(())
}
