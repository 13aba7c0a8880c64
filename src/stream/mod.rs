// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod pipe;
mod streamable;

pub use pipe::pipe_through_handler;
pub use streamable::Streamable;
