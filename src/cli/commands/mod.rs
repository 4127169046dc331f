pub mod config;
pub mod insight;
pub mod record;
pub mod summary;
pub mod system;

use super::core::{CommandResult, ShellContext};

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(summary::definitions());
    commands.extend(record::definitions());
    commands.extend(insight::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Lookup table for shell commands, kept in registration order so help
/// output and completion match the menu the user sees.
pub struct CommandRegistry {
    commands: Vec<CommandDefinition>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        Self {
            commands: definitions,
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands
            .iter()
            .find(|definition| definition.name == name)
    }

    pub fn list(&self) -> &[CommandDefinition] {
        &self.commands
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|definition| definition.name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new(all_definitions())
    }
}
