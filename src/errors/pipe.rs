// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for stream piping.

use thiserror::Error;

/// Errors that can occur while piping the process streams through a handler
#[derive(Debug, Error)]
pub enum PipeError {
    /// The stream handler itself failed; nothing was written to the output
    #[error("stream handler failed")]
    Handler {
        #[source]
        source: anyhow::Error,
    },

    /// A read or write error occurred while copying the result stream.
    /// Bytes flushed before the failure cannot be rolled back.
    #[error("stream copy failed")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
