// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

/// Reserved flag naming the config-file path.
const CONFIG_FLAG: &str = "config";
/// Reserved flag overriding the configuration's declared main handler.
const MAIN_FLAG: &str = "main";

/// The value carried by a parsed flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// A bare `--flag` with no value
    Set,
    /// `--flag=value` or `--flag value`
    Text(String),
}

/// The parsed command-line invocation.
///
/// The first positional argument is the module path; `--config` and
/// `--main` are reserved. Every flag, reserved or not, stays visible to
/// the stream handler — the whole arguments object is forwarded verbatim
/// as the handler's invocation arguments, so handler-specific flags like
/// `--repeat` need no declaration here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    positionals: Vec<String>,
    flags: HashMap<String, FlagValue>,
}

/// The arguments object as seen by a stream handler.
pub type InvocationArgs = CommandArgs;

impl CommandArgs {
    /// Parse raw arguments (program name already stripped).
    ///
    /// Accepted forms: `--key=value`, `--key value`, bare `--key`, and
    /// plain positionals. A `--key` followed by another `--flag` or by
    /// nothing is a bare flag.
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut positionals = Vec::new();
        let mut flags = HashMap::new();

        let mut iter = args.into_iter().peekable();
        while let Some(arg) = iter.next() {
            let Some(flag) = arg.strip_prefix("--") else {
                positionals.push(arg);
                continue;
            };

            if let Some((key, value)) = flag.split_once('=') {
                flags.insert(key.to_string(), FlagValue::Text(value.to_string()));
            } else if iter
                .peek()
                .is_some_and(|next| !next.starts_with("--"))
            {
                let value = iter.next().unwrap_or_default();
                flags.insert(flag.to_string(), FlagValue::Text(value));
            } else {
                flags.insert(flag.to_string(), FlagValue::Set);
            }
        }

        Self { positionals, flags }
    }

    /// All positional arguments, in order
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// The module path: the first positional argument
    pub fn module_path(&self) -> Option<&str> {
        self.positionals.first().map(String::as_str)
    }

    /// The reserved `--config` flag
    pub fn config_path(&self) -> Option<&str> {
        self.flag(CONFIG_FLAG)
    }

    /// The reserved `--main` flag
    pub fn main_handler(&self) -> Option<&str> {
        self.flag(MAIN_FLAG)
    }

    /// A flag's text value, if the flag was given one
    pub fn flag(&self, name: &str) -> Option<&str> {
        match self.flags.get(name) {
            Some(FlagValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Whether a flag was present at all, with or without a value
    pub fn is_set(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }
}
