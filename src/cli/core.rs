//! Shell context, command dispatch, and CLI error types.

use std::io;

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    controller::{ExpenseTrackerController, InputValidator},
    errors::{ConfigError, LedgerError},
    ledger::Ledger,
    view::TableView,
};

use super::commands;
use super::help;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failures raised by individual commands. None of them end the shell.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Failures that stop the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub controller: ExpenseTrackerController<TableView>,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::new()?)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        output::apply_config(&config);
        let controller = ExpenseTrackerController::with_validator(
            Ledger::new(),
            TableView::new(&config),
            InputValidator::from_config(&config),
        );
        tracing::debug!(path = %config_manager.path().display(), ?mode, "shell context ready");

        Ok(Self {
            mode,
            registry,
            controller,
            config,
            config_manager,
            running: true,
        })
    }

    pub fn prompt(&self) -> String {
        match self.controller.filter() {
            Some(filter) => format!("expenses [{}]> ", filter),
            None => "expenses> ".to_string(),
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenises and dispatches one input line.
    pub fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match shell_words::split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }

    pub(crate) fn print_help(&self, command: Option<&str>) {
        match command {
            Some(name) => match self.command(&name.to_lowercase()) {
                Some(entry) => help::print_command(entry),
                None => self.suggest_command(name),
            },
            None => help::print_overview(&self.registry),
        }
    }

    pub(crate) fn print_table(&self) {
        output::block(self.controller.view().render());
    }

    pub(crate) fn format_amount(&self, amount: f64) -> String {
        self.controller.view().format_amount(amount)
    }

    /// Persists `config` and applies it to output, view, and validation.
    pub(crate) fn update_config(&mut self, config: Config) -> CommandResult {
        self.config_manager.save(&config)?;
        output::apply_config(&config);
        self.controller.set_validator(InputValidator::from_config(&config));
        self.controller.view_mut().configure(&config);
        self.controller.refresh();
        self.config = config;
        Ok(())
    }
}
