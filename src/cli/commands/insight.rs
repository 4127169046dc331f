//! The AI financial advisor command.

use tokio::runtime::Builder;

use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::insight::{self, GeminiClient};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "insight",
        "Ask the AI financial advisor about recent performance",
        "insight",
        cmd_insight,
    )]
}

fn cmd_insight(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.store.is_empty() {
        cli_io::print_info(insight::NO_DATA_MESSAGE);
        return Ok(());
    }

    let Some(client) = GeminiClient::from_env(context.config.insight_model.as_deref()) else {
        cli_io::print_warning("GEMINI_API_KEY is not set; the financial advisor is offline.");
        return Ok(());
    };

    cli_io::print_info(format!(
        "Consulting the financial advisor ({})...",
        client.model()
    ));
    let runtime = Builder::new_current_thread().enable_all().build()?;
    let analysis = runtime.block_on(insight::request_insight(&client, context.store.records()));

    output::section("Financial Insight");
    output::render_block(analysis);
    Ok(())
}
