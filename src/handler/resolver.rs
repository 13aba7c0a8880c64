// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::Config;
use crate::errors::ResolveError;
use crate::handler::StreamHandler;

/// Resolve a named handler from the merged configuration.
///
/// Resolution is deterministic: the builder is looked up by exact name,
/// invoked once with the configuration, and the stream-handler capability
/// is extracted from the resulting handleable. There are no retries —
/// aside from the builder invocation the steps are side-effect-free, so
/// retrying without external change cannot help.
pub async fn resolve_stream_handler(
    config: &Config,
    name: &str,
) -> Result<Arc<dyn StreamHandler>, ResolveError> {
    let builder = config
        .builder(name)
        .ok_or_else(|| ResolveError::HandlerNotFound {
            name: name.to_string(),
        })?;

    let handleable = builder
        .build(config)
        .await
        .map_err(|source| ResolveError::Builder {
            name: name.to_string(),
            source,
        })?;

    handleable
        .to_stream_handler()
        .ok_or_else(|| ResolveError::WrongHandleableType {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::InvocationArgs;
    use crate::handler::{Handleable, HandleableBuilder, SimpleHandler};
    use crate::stream::Streamable;
    use async_trait::async_trait;

    struct EchoText;

    #[async_trait]
    impl SimpleHandler for EchoText {
        async fn handle(&self, _args: &InvocationArgs, input: String) -> anyhow::Result<String> {
            Ok(input)
        }
    }

    struct SimpleOnlyBuilder;

    #[async_trait]
    impl HandleableBuilder for SimpleOnlyBuilder {
        async fn build(&self, _config: &Config) -> anyhow::Result<Handleable> {
            Ok(Handleable::Simple(Arc::new(EchoText)))
        }
    }

    struct FailingBuilder;

    #[async_trait]
    impl HandleableBuilder for FailingBuilder {
        async fn build(&self, _config: &Config) -> anyhow::Result<Handleable> {
            Err(anyhow::anyhow!("builder exploded"))
        }
    }

    #[tokio::test]
    async fn unknown_name_is_handler_not_found() {
        let config = Config::new();

        let err = resolve_stream_handler(&config, "nonexistent")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ResolveError::HandlerNotFound { ref name } if name == "nonexistent"
        ));
    }

    #[tokio::test]
    async fn resolution_failure_is_stable_across_calls() {
        let config = Config::new();

        for _ in 0..3 {
            let err = resolve_stream_handler(&config, "nonexistent")
                .await
                .unwrap_err();
            assert!(matches!(err, ResolveError::HandlerNotFound { .. }));
        }
    }

    #[tokio::test]
    async fn builder_failure_is_propagated_verbatim() {
        let mut config = Config::new();
        config.insert_builder("broken", Arc::new(FailingBuilder));

        let err = resolve_stream_handler(&config, "broken").await.unwrap_err();

        match err {
            ResolveError::Builder { name, source } => {
                assert_eq!(name, "broken");
                assert_eq!(source.to_string(), "builder exploded");
            }
            other => panic!("expected Builder error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn handleable_without_stream_capability_is_wrong_type() {
        let mut config = Config::new();
        config.insert_builder("text_only", Arc::new(SimpleOnlyBuilder));

        let err = resolve_stream_handler(&config, "text_only")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ResolveError::WrongHandleableType { ref name } if name == "text_only"
        ));
    }

    #[tokio::test]
    async fn resolved_handler_is_usable() {
        let mut config = Config::new();
        config.insert_builder("echo", Arc::new(crate::builtin::EchoBuilder));

        let handler = resolve_stream_handler(&config, "echo").await.unwrap();

        let args = InvocationArgs::parse(Vec::new());
        let result = handler
            .handle(&args, Streamable::from_text("ping".to_string()))
            .await
            .unwrap();
        assert_eq!(result.into_text().await.unwrap(), "ping");
    }
}
