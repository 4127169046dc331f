//! Shell context, command dispatch, and the errors handlers return.

use std::io;

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use tracing::warn;

use crate::{
    config::{Config, ConfigManager},
    errors::{CliError, SaleTrackError},
    storage::JsonStorage,
    store::RecordStore,
};

use super::commands::CommandRegistry;
use super::io as cli_io;

/// Whether the shell prompts interactively or consumes scripted stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Everything a command handler can reach: the record store, the active
/// configuration, and the prompt theme.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) store: RecordStore,
    pub(crate) theme: ColorfulTheme,
    pub(crate) config_manager: ConfigManager,
    pub(crate) config: Config,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let storage = JsonStorage::new_default().map_err(CliError::from)?;
        let store = RecordStore::open(Box::new(storage));
        let config_manager = ConfigManager::new().map_err(CliError::from)?;
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "Could not read configuration; using defaults.");
                Config::default()
            }
        };

        Ok(Self {
            mode,
            registry: CommandRegistry::default(),
            store,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_parts(
        mode: CliMode,
        store: RecordStore,
        config_manager: ConfigManager,
        config: Config,
    ) -> Self {
        Self {
            mode,
            registry: CommandRegistry::default(),
            store,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
        }
    }

    pub(crate) fn prompt(&self) -> String {
        format!("saletrack [{}]> ", self.store.len())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(definition) = self.registry.get(command) {
            let handler = definition.handler;
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

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|name| (levenshtein(name, input), name))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    /// Asks a yes/no question. Scripted sessions auto-accept so piped
    /// command streams never block on a prompt.
    pub(crate) fn confirm(&self, prompt: &str, default: bool) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, prompt, default)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit shell?", true)?)
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        Ok(self.config_manager.save(&self.config)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_hint(message);
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

pub(crate) fn parse_amount(label: &str, input: &str) -> Result<f64, CommandError> {
    input
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid {label} amount `{input}`")))
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] SaleTrackError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(context: &mut ShellContext, lines: &[&str]) -> Result<(), CliError> {
    for line in lines {
        match context.process_line(line)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(())
}
