// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod builtin;       // built-in handler components
pub mod command;       // argument parsing + command driver
pub mod component;     // component descriptors + installer
pub mod config;        // configuration merging + fragment loading
pub mod errors;        // error handling
pub mod handler;       // handleables + handler resolution
pub mod module;        // module resolution
pub mod observability; // structured log messages
pub mod stream;        // streamables + stream piping
