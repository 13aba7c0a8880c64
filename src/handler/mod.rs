// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod handleable;
mod resolver;

pub use handleable::{Handleable, HandleableBuilder, SimpleHandler, StreamHandler};
pub use resolver::resolve_stream_handler;
