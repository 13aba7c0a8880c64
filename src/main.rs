// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::process::ExitCode;

use quiver_command::command::{run_command, CommandArgs, CommandContext};
use quiver_command::observability::messages::command::CommandFailed;
use quiver_command::observability::messages::StructuredLog;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut raw_args = env::args();
    let program = raw_args.next().unwrap_or_else(|| "quiver".to_string());
    let args = CommandArgs::parse(raw_args);

    if args.module_path().is_none() {
        eprintln!(
            "Usage: {} <module-path> [--config=<path>] [--main=<handler-name>] [--<handler-flags>]",
            program
        );
        return ExitCode::FAILURE;
    }

    let base_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{}: cannot determine working directory: {}", program, e);
            return ExitCode::FAILURE;
        }
    };

    let ctx = CommandContext::with_builtins(base_dir);

    match run_command(&args, &ctx, tokio::io::stdin(), tokio::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            CommandFailed { error: &e }.log();
            eprintln!("{}: {}", program, e);
            ExitCode::FAILURE
        }
    }
}
