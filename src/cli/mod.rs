//! Line-oriented terminal front-end over the expense controller.

pub mod commands;
pub mod core;
pub mod help;
pub mod output;
pub mod registry;
pub mod shell;

pub use self::core::{CliError, CliMode, CommandError, CommandResult, LoopControl, ShellContext};
pub use shell::run_cli;
