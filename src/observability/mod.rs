// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in quiver-command. Message types follow a
//! struct-based pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! # Usage
//!
//! ```rust
//! use quiver_command::observability::messages::command::HandlerResolved;
//!
//! let msg = HandlerResolved { name: "test hello handler" };
//! tracing::info!("{}", msg);
//! ```

pub mod messages;
