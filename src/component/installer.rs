// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use async_trait::async_trait;

use crate::command::InvocationArgs;
use crate::component::{ComponentDescriptor, ComponentKind, TEXT_PAYLOAD_TYPE};
use crate::config::Config;
use crate::errors::InstallError;
use crate::handler::{Handleable, HandleableBuilder, SimpleHandler, StreamHandler};
use crate::stream::Streamable;

/// Install component descriptors into a configuration fragment.
///
/// The fragment's builder mapping gains one entry per component, keyed by
/// component name. Stream handler components register their builder
/// as-is; simple handler components (text in, text out) are wrapped so
/// that the installed builder yields a stream-capable handleable.
/// Descriptors are consumed; installation happens exactly once per run.
pub fn install_components(
    descriptors: Vec<ComponentDescriptor>,
) -> Result<Config, InstallError> {
    let mut fragment = Config::new();

    for descriptor in descriptors {
        if fragment.builder(&descriptor.name).is_some() {
            return Err(InstallError::DuplicateComponent {
                name: descriptor.name,
            });
        }

        let builder: Arc<dyn HandleableBuilder> = match descriptor.kind {
            ComponentKind::StreamHandler => descriptor.builder,
            ComponentKind::SimpleHandler => {
                check_payload_type(&descriptor.name, "input", &descriptor.input_type)?;
                check_payload_type(&descriptor.name, "output", &descriptor.output_type)?;
                Arc::new(SimpleInstallBuilder {
                    inner: descriptor.builder,
                })
            }
        };

        fragment.insert_builder(descriptor.name, builder);
    }

    Ok(fragment)
}

fn check_payload_type(
    name: &str,
    direction: &'static str,
    declared: &str,
) -> Result<(), InstallError> {
    if declared == TEXT_PAYLOAD_TYPE {
        Ok(())
    } else {
        Err(InstallError::UnsupportedPayloadType {
            name: name.to_string(),
            direction,
            declared: declared.to_string(),
        })
    }
}

/// Installed wrapper around a simple-handler component's builder.
struct SimpleInstallBuilder {
    inner: Arc<dyn HandleableBuilder>,
}

#[async_trait]
impl HandleableBuilder for SimpleInstallBuilder {
    async fn build(&self, config: &Config) -> anyhow::Result<Handleable> {
        match self.inner.build(config).await? {
            Handleable::Simple(simple) => Ok(Handleable::Stream(Arc::new(
                SimpleHandlerAdapter { inner: simple },
            ))),
            // Already stream-capable; nothing to adapt.
            stream @ Handleable::Stream(_) => Ok(stream),
        }
    }
}

/// Adapts a text handler to the streamable model: drain input to UTF-8
/// text, invoke, re-wrap the result.
struct SimpleHandlerAdapter {
    inner: Arc<dyn SimpleHandler>,
}

#[async_trait]
impl StreamHandler for SimpleHandlerAdapter {
    async fn handle(
        &self,
        args: &InvocationArgs,
        input: Streamable,
    ) -> anyhow::Result<Streamable> {
        let text = input.into_text().await?;
        let result = self.inner.handle(args, text).await?;
        Ok(Streamable::from_text(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::resolve_stream_handler;

    struct Shout;

    #[async_trait]
    impl SimpleHandler for Shout {
        async fn handle(&self, _args: &InvocationArgs, input: String) -> anyhow::Result<String> {
            Ok(input.to_uppercase())
        }
    }

    struct ShoutBuilder;

    #[async_trait]
    impl HandleableBuilder for ShoutBuilder {
        async fn build(&self, _config: &Config) -> anyhow::Result<Handleable> {
            Ok(Handleable::Simple(Arc::new(Shout)))
        }
    }

    fn simple_descriptor(name: &str) -> ComponentDescriptor {
        ComponentDescriptor {
            name: name.to_string(),
            kind: ComponentKind::SimpleHandler,
            input_type: TEXT_PAYLOAD_TYPE.to_string(),
            output_type: TEXT_PAYLOAD_TYPE.to_string(),
            builder: Arc::new(ShoutBuilder),
        }
    }

    #[tokio::test]
    async fn simple_handler_component_is_installed_stream_capable() {
        let fragment = install_components(vec![simple_descriptor("shout")]).unwrap();

        let handler = resolve_stream_handler(&fragment, "shout").await.unwrap();
        let args = InvocationArgs::parse(Vec::new());
        let result = handler
            .handle(&args, Streamable::from_text("quiet".to_string()))
            .await
            .unwrap();

        assert_eq!(result.into_text().await.unwrap(), "QUIET");
    }

    #[tokio::test]
    async fn stream_handler_component_keeps_its_builder() {
        let descriptor = ComponentDescriptor {
            name: "echo".to_string(),
            kind: ComponentKind::StreamHandler,
            input_type: "stream".to_string(),
            output_type: "stream".to_string(),
            builder: Arc::new(crate::builtin::EchoBuilder),
        };

        let fragment = install_components(vec![descriptor]).unwrap();
        assert!(fragment.builder("echo").is_some());
        assert_eq!(fragment.builder_count(), 1);
    }

    #[test]
    fn duplicate_component_names_are_rejected() {
        let err = install_components(vec![
            simple_descriptor("shout"),
            simple_descriptor("shout"),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            InstallError::DuplicateComponent { ref name } if name == "shout"
        ));
    }

    #[test]
    fn non_text_simple_handler_is_rejected() {
        let mut descriptor = simple_descriptor("binary");
        descriptor.input_type = "bytes".to_string();

        let err = install_components(vec![descriptor]).unwrap_err();

        assert!(matches!(
            err,
            InstallError::UnsupportedPayloadType {
                direction: "input",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn adapter_surfaces_invalid_utf8_as_handler_failure() {
        let fragment = install_components(vec![simple_descriptor("shout")]).unwrap();
        let handler = resolve_stream_handler(&fragment, "shout").await.unwrap();

        let args = InvocationArgs::parse(Vec::new());
        let result = handler
            .handle(&args, Streamable::from_bytes(vec![0xff, 0xfe]))
            .await;

        assert!(result.is_err());
    }
}
