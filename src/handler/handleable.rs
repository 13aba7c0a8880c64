// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use async_trait::async_trait;

use crate::command::InvocationArgs;
use crate::config::Config;
use crate::stream::Streamable;

/// The unit of work the entire pipeline exists to invoke exactly once per
/// process run: converts an input streamable into a result streamable.
///
/// Handler-defined failures are `anyhow::Error` and are propagated
/// verbatim without reinterpretation.
#[async_trait]
pub trait StreamHandler: Send + Sync {
    async fn handle(
        &self,
        args: &InvocationArgs,
        input: Streamable,
    ) -> anyhow::Result<Streamable>;
}

impl std::fmt::Debug for dyn StreamHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StreamHandler")
    }
}

/// A text-in, text-out handler.
///
/// Simple handlers never touch raw streams; the component installer adapts
/// them into stream handlers by draining the input streamable to UTF-8
/// text and re-wrapping the result.
#[async_trait]
pub trait SimpleHandler: Send + Sync {
    async fn handle(&self, args: &InvocationArgs, input: String) -> anyhow::Result<String>;
}

/// Builds a handleable from the merged configuration.
///
/// Builders are looked up by exact name; they may fail, and their errors
/// are carried verbatim through resolution.
#[async_trait]
pub trait HandleableBuilder: Send + Sync {
    async fn build(&self, config: &Config) -> anyhow::Result<Handleable>;
}

/// A capability-bearing object produced by a component builder.
///
/// The union is closed over the handleable kinds this crate knows about;
/// capability queries are explicit methods returning `Option` rather than
/// probes for a method's existence.
#[derive(Clone)]
pub enum Handleable {
    /// Can handle a raw byte stream directly
    Stream(Arc<dyn StreamHandler>),
    /// Text-only; lacks the stream capability until installed with an
    /// adapter
    Simple(Arc<dyn SimpleHandler>),
}

impl Handleable {
    /// Query the stream-handler capability.
    ///
    /// Returns `None` for handleable kinds that cannot process a raw byte
    /// stream; resolution reports those as a wrong-type failure, distinct
    /// from "not found".
    pub fn to_stream_handler(&self) -> Option<Arc<dyn StreamHandler>> {
        match self {
            Handleable::Stream(handler) => Some(Arc::clone(handler)),
            Handleable::Simple(_) => None,
        }
    }

    /// Human-readable kind name, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Handleable::Stream(_) => "stream handler",
            Handleable::Simple(_) => "simple handler",
        }
    }
}

impl std::fmt::Debug for Handleable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Handleable").field(&self.kind()).finish()
    }
}
