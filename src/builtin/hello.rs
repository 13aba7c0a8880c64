// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use async_trait::async_trait;
use serde_yaml::Value;

use crate::command::InvocationArgs;
use crate::config::Config;
use crate::handler::{Handleable, HandleableBuilder, SimpleHandler};

/// Builds the `hello` greeting handler.
///
/// The greeting word comes from the configuration's `greet` entry,
/// falling back to `"hello"`.
pub struct HelloBuilder;

#[async_trait]
impl HandleableBuilder for HelloBuilder {
    async fn build(&self, config: &Config) -> anyhow::Result<Handleable> {
        let greet = config
            .entry("greet")
            .and_then(Value::as_str)
            .unwrap_or("hello")
            .to_string();

        Ok(Handleable::Simple(Arc::new(HelloHandler { greet })))
    }
}

/// Greets whatever name arrives on the input: `<greet>, <name>`.
/// With the `repeat` flag set, the greeting is doubled.
pub struct HelloHandler {
    greet: String,
}

#[async_trait]
impl SimpleHandler for HelloHandler {
    async fn handle(&self, args: &InvocationArgs, input: String) -> anyhow::Result<String> {
        let mut greeting = format!("{}, {}", self.greet, input);

        if args.is_set("repeat") {
            greeting = greeting.repeat(2);
        }

        Ok(greeting)
    }
}
