// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod merge;

pub use loader::load_config_fragment;
pub use merge::Config;
