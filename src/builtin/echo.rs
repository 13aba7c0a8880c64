// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use async_trait::async_trait;

use crate::command::InvocationArgs;
use crate::config::Config;
use crate::handler::{Handleable, HandleableBuilder, StreamHandler};
use crate::stream::Streamable;

/// Builds the `echo` identity stream handler.
pub struct EchoBuilder;

#[async_trait]
impl HandleableBuilder for EchoBuilder {
    async fn build(&self, _config: &Config) -> anyhow::Result<Handleable> {
        Ok(Handleable::Stream(Arc::new(EchoHandler)))
    }
}

/// Identity handler: the result streamable is the input streamable,
/// untouched and unbuffered.
pub struct EchoHandler;

#[async_trait]
impl StreamHandler for EchoHandler {
    async fn handle(
        &self,
        _args: &InvocationArgs,
        input: Streamable,
    ) -> anyhow::Result<Streamable> {
        Ok(input)
    }
}
