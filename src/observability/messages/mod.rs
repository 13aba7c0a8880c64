// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! `StructuredLog` to emit the same event with structured fields.

use tracing::Span;

pub mod command;

/// Emit a message as a structured tracing event or span.
pub trait StructuredLog {
    /// Log the message at its designated level with structured fields
    fn log(&self);

    /// Create a span carrying the message's fields
    fn span(&self, name: &str) -> Span;
}
