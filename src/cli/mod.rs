// src/cli/mod.rs
pub mod args;
pub mod shell;

pub use shell::{parse_command, ParseError, Shell, ShellCommand};
