// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for stream handler resolution.

use thiserror::Error;

/// Errors that can occur while resolving a named handler from configuration
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The requested handler name is absent from the merged configuration
    #[error("handler component not found: '{name}'")]
    HandlerNotFound { name: String },

    /// The handler's builder failed; the builder-defined error is carried
    /// verbatim as the source
    #[error("builder for handler '{name}' failed")]
    Builder {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The builder produced a handleable that cannot act as a stream handler
    #[error("component is not of type stream handler: '{name}'")]
    WrongHandleableType { name: String },
}
