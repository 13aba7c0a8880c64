// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! End-to-end scenarios for the command driver: real module manifests on
//! disk, in-memory standard streams.

use std::io::Cursor;

use crate::command::{run_command, CommandArgs, CommandContext};
use crate::errors::{CommandError, ModuleError};

const HELLO_MODULE: &str = "\
components:
  - name: test hello handler
    type: simple_handler
    input_type: text
    output_type: text
    handler_builder: hello
";

const ECHO_MODULE: &str = "\
components:
  - name: echo
    type: stream_handler
    input_type: stream
    output_type: stream
    handler_builder: echo
";

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).unwrap();
    }

    fn context(&self) -> CommandContext {
        CommandContext::with_builtins(self.dir.path().to_path_buf())
    }

    async fn run(&self, args: &[&str], stdin: &[u8]) -> (Result<(), CommandError>, Vec<u8>) {
        let args = CommandArgs::parse(args.iter().map(|s| s.to_string()));
        let mut stdout = Vec::new();
        let result = run_command(
            &args,
            &self.context(),
            Cursor::new(stdin.to_vec()),
            &mut stdout,
        )
        .await;
        (result, stdout)
    }
}

#[tokio::test]
async fn hello_module_greets_stdin() {
    let fixture = Fixture::new();
    fixture.write("module.yaml", HELLO_MODULE);

    let (result, stdout) = fixture
        .run(&["module.yaml", "--main=test hello handler"], b"World")
        .await;

    result.unwrap();
    assert_eq!(String::from_utf8(stdout).unwrap(), "hello, World");
}

#[tokio::test]
async fn repeat_flag_doubles_the_greeting() {
    let fixture = Fixture::new();
    fixture.write("module.yaml", HELLO_MODULE);

    let (result, stdout) = fixture
        .run(
            &["module.yaml", "--main=test hello handler", "--repeat"],
            b"World",
        )
        .await;

    result.unwrap();
    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        "hello, Worldhello, World"
    );
}

#[tokio::test]
async fn config_file_supplies_main_and_overrides_defaults() {
    let fixture = Fixture::new();
    fixture.write("module.yaml", HELLO_MODULE);
    fixture.write("conf.yaml", "main: test hello handler\ngreet: howdy\n");

    let (result, stdout) = fixture
        .run(&["module.yaml", "--config=conf.yaml"], b"World")
        .await;

    result.unwrap();
    assert_eq!(String::from_utf8(stdout).unwrap(), "howdy, World");
}

const MIXED_MODULE: &str = "\
components:
  - name: test hello handler
    type: simple_handler
    input_type: text
    output_type: text
    handler_builder: hello
  - name: echo
    type: stream_handler
    input_type: stream
    output_type: stream
    handler_builder: echo
";

#[tokio::test]
async fn explicit_main_wins_over_config_main() {
    let fixture = Fixture::new();
    fixture.write("module.yaml", MIXED_MODULE);
    fixture.write("conf.yaml", "main: test hello handler\n");

    let (result, stdout) = fixture
        .run(
            &["module.yaml", "--config=conf.yaml", "--main=echo"],
            b"raw bytes",
        )
        .await;

    result.unwrap();
    assert_eq!(stdout, b"raw bytes");
}

#[tokio::test]
async fn missing_module_path_fails_before_any_io() {
    let fixture = Fixture::new();

    let (result, stdout) = fixture.run(&[], b"World").await;

    assert!(matches!(result, Err(CommandError::MissingModulePath)));
    assert!(stdout.is_empty());
}

#[tokio::test]
async fn no_main_anywhere_fails_with_nothing_written() {
    let fixture = Fixture::new();
    fixture.write("module.yaml", HELLO_MODULE);

    let (result, stdout) = fixture.run(&["module.yaml"], b"World").await;

    assert!(matches!(result, Err(CommandError::NoMainHandlerSpecified)));
    assert!(stdout.is_empty());
}

#[tokio::test]
async fn non_quiver_module_is_reported_as_such() {
    let fixture = Fixture::new();
    fixture.write("plain.yaml", "greet: hi\n");

    let (result, stdout) = fixture
        .run(&["plain.yaml", "--main=test hello handler"], b"World")
        .await;

    assert!(matches!(
        result,
        Err(CommandError::Module(ModuleError::NotAQuiverModule { .. }))
    ));
    assert!(stdout.is_empty());
}

#[tokio::test]
async fn unknown_main_handler_is_a_resolution_failure() {
    let fixture = Fixture::new();
    fixture.write("module.yaml", HELLO_MODULE);

    let (result, stdout) = fixture
        .run(&["module.yaml", "--main=nonexistent"], b"World")
        .await;

    match result {
        Err(CommandError::Resolve(crate::errors::ResolveError::HandlerNotFound { name })) => {
            assert_eq!(name, "nonexistent");
        }
        other => panic!("expected HandlerNotFound, got {:?}", other),
    }
    assert!(stdout.is_empty());
}

#[tokio::test]
async fn echo_module_streams_bytes_through_untouched() {
    let fixture = Fixture::new();
    fixture.write("module.yaml", ECHO_MODULE);

    let payload: Vec<u8> = (0..64 * 1024).map(|i| (i % 256) as u8).collect();
    let (result, stdout) = fixture.run(&["module.yaml", "--main=echo"], &payload).await;

    result.unwrap();
    assert_eq!(stdout, payload);
}
