// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod args;
mod driver;

#[cfg(test)]
mod integration_tests;

pub use args::{CommandArgs, FlagValue, InvocationArgs};
pub use driver::{run_command, CommandContext};
