//! Aggregate totals and the recent-performance chart.

use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::ui::chart;
use crate::cli::ui::format::{money, signed_money};
use crate::journal::{recent_window, totals};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "summary",
        "Show overall totals and recent performance",
        "summary",
        cmd_summary,
    )]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.store.is_empty() {
        cli_io::print_info("No records yet. Use `add` to record your first day.");
        return Ok(());
    }

    let symbol = context.config.currency_symbol.clone();
    let overall = totals(context.store.records());

    output::section("Business Summary");
    cli_io::print_info(format!(
        "Total sale:     {}",
        signed_money(&symbol, overall.net_total_sale)
    ));
    cli_io::print_info(format!(
        "  Cash sales:   {}",
        money(&symbol, overall.cash_total)
    ));
    cli_io::print_info(format!(
        "  Card sales:   {}",
        money(&symbol, overall.card_total)
    ));
    cli_io::print_info(format!(
        "Expenses:       {}",
        money(&symbol, overall.expense_total)
    ));
    cli_io::print_info(format!(
        "Cash remaining: {}",
        signed_money(&symbol, overall.cash_remaining)
    ));

    let window = recent_window(context.store.records(), context.config.chart_days);
    output::section(format!("Last {} day(s)", window.len()));
    output::render_block(chart::render(&window, &symbol));
    cli_io::print_hint("Use `insight` for an AI read on recent performance.");
    Ok(())
}
