use super::commands::{CommandDefinition, CommandRegistry};
use super::io;
use super::output::section;

pub fn print_overview(registry: &CommandRegistry) {
    section("Available commands");
    for definition in registry.list() {
        io::print_info(format!("  {:<10} {}", definition.name, definition.description));
    }
    io::print_info("Use `help <command>` for usage details.");
}

pub fn print_command(definition: &CommandDefinition) {
    section(format!("Help: {}", definition.name));
    io::print_info(format!("  Description: {}", definition.description));
    io::print_info(format!("  Usage: {}", definition.usage));
}
