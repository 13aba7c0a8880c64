// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod echo;
mod hello;

pub use echo::{EchoBuilder, EchoHandler};
pub use hello::{HelloBuilder, HelloHandler};
