//! Shell settings: currency symbol, chart window, and insight model.

use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;

const SET_USAGE: &str = "usage: config set <currency|chart-days|insight-model> <value>";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "config",
        "Show or change shell settings",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return show_settings(context);
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(SET_USAGE.into()));
            }
            let key = args[1].to_lowercase();
            let value = args[2..].join(" ");
            set_value(context, &key, value.trim())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}` (try `show` or `set`)"
        ))),
    }
}

fn show_settings(context: &ShellContext) -> CommandResult {
    output::section("Settings");
    cli_io::print_info(format!("currency       {}", context.config.currency_symbol));
    cli_io::print_info(format!("chart-days     {}", context.config.chart_days));
    cli_io::print_info(format!(
        "insight-model  {}",
        context
            .config
            .insight_model
            .as_deref()
            .unwrap_or("(default)")
    ));
    cli_io::print_info(format!(
        "Stored at {}.",
        context.config_manager.path().display()
    ));
    Ok(())
}

fn set_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    match key {
        "currency" => {
            if value.is_empty() {
                return Err(CommandError::InvalidArguments(
                    "currency symbol cannot be empty".into(),
                ));
            }
            context.config.currency_symbol = value.to_string();
        }
        "chart-days" => {
            let days: usize = value.parse().map_err(|_| {
                CommandError::InvalidArguments(format!("`{value}` is not a number of days"))
            })?;
            if !(1..=90).contains(&days) {
                return Err(CommandError::InvalidArguments(
                    "chart-days must be between 1 and 90".into(),
                ));
            }
            context.config.chart_days = days;
        }
        "insight-model" => {
            context.config.insight_model = if value.eq_ignore_ascii_case("default") {
                None
            } else {
                Some(value.to_string())
            };
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown setting `{other}` ({SET_USAGE})"
            )));
        }
    }

    context.persist_config()?;
    cli_io::print_success(format!("Updated {key}."));
    Ok(())
}
