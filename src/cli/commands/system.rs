use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::utils::paths;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("help", "Show available commands", "help [command]", cmd_help),
        CommandDefinition::new(
            "version",
            "Show version and data locations",
            "version",
            cmd_version,
        ),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let query = name.to_lowercase();
        if let Some(definition) = context.registry.get(&query) {
            help::print_command(definition);
        } else {
            context.suggest_command(name);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_version(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section(format!("SaleTrack {}", env!("CARGO_PKG_VERSION")));
    cli_io::print_info(format!(
        "  Data dir: {}",
        paths::app_data_dir().display()
    ));
    cli_io::print_info(format!(
        "  Config  : {}",
        context.config_manager.path().display()
    ));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
