// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for command pipeline lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Module resolution and component installation
//! * Handler resolution
//! * Stream pipe completion and command failure

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// A module path was resolved into a quiver module.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ModuleResolved<'a> {
    pub path: &'a Path,
    pub component_count: usize,
}

impl Display for ModuleResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved module '{}' with {} components",
            self.path.display(),
            self.component_count
        )
    }
}

impl StructuredLog for ModuleResolved<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            component_count = self.component_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "module_resolution",
            span_name = name,
            path = %self.path.display(),
            component_count = self.component_count,
        )
    }
}

/// Component descriptors were installed into a configuration fragment.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct ComponentsInstalled {
    pub handler_count: usize,
}

impl Display for ComponentsInstalled {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Installed {} handler builders into configuration",
            self.handler_count
        )
    }
}

impl StructuredLog for ComponentsInstalled {
    fn log(&self) {
        tracing::debug!(handler_count = self.handler_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "component_installation",
            span_name = name,
            handler_count = self.handler_count,
        )
    }
}

/// The main handler was resolved from the merged configuration.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use quiver_command::observability::messages::command::HandlerResolved;
///
/// let msg = HandlerResolved { name: "test hello handler" };
/// tracing::info!("{}", msg);
/// ```
pub struct HandlerResolved<'a> {
    pub name: &'a str,
}

impl Display for HandlerResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Resolved stream handler '{}'", self.name)
    }
}

impl StructuredLog for HandlerResolved<'_> {
    fn log(&self) {
        tracing::info!(handler = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("handler_resolution", span_name = name, handler = self.name)
    }
}

/// Stream piping finished and the output was flushed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipeCompleted {
    pub bytes_written: u64,
}

impl Display for PipeCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Pipe completed, {} bytes written", self.bytes_written)
    }
}

impl StructuredLog for PipeCompleted {
    fn log(&self) {
        tracing::info!(bytes_written = self.bytes_written, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "stream_pipe",
            span_name = name,
            bytes_written = self.bytes_written,
        )
    }
}

/// The command pipeline failed; the first error encountered is carried.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct CommandFailed<'a> {
    pub error: &'a (dyn std::error::Error + 'static),
}

impl Display for CommandFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Command failed: {}", self.error)
    }
}

impl StructuredLog for CommandFailed<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("command_failure", span_name = name, error = %self.error)
    }
}
