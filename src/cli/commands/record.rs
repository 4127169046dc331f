//! Record entry, listing, and deletion commands.

use chrono::Local;
use dialoguer::Select;

use crate::cli::commands::CommandDefinition;
use crate::cli::core::{
    parse_amount, parse_date, CliMode, CommandError, CommandResult, ShellContext,
};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::ui::format::{money, signed_money};
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::journal::{record_metrics, SaleRecord};

const ADD_USAGE: &str = "usage: add <date> <cash> <card> <expenses> [note...]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "add",
            "Record a day's sales and expenses",
            "add [<date> <cash> <card> <expenses> [note...]]",
            cmd_add,
        ),
        CommandDefinition::new(
            "history",
            "List every record, newest first",
            "history",
            cmd_history,
        ),
        CommandDefinition::new(
            "delete",
            "Delete a record by its history position",
            "delete [<position>]",
            cmd_delete,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let record = if args.is_empty() {
        if context.mode != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(ADD_USAGE.into()));
        }
        match collect_record(context)? {
            Some(record) => record,
            None => {
                cli_io::print_info("Entry cancelled.");
                return Ok(());
            }
        }
    } else {
        record_from_args(args)?
    };

    let date = record.date;
    let metrics = record_metrics(&record);
    context.store.add(record);
    cli_io::print_success(format!(
        "Recorded {date}: net {}.",
        money(&context.config.currency_symbol, metrics.net_total)
    ));
    Ok(())
}

fn record_from_args(args: &[&str]) -> Result<SaleRecord, CommandError> {
    if args.len() < 4 {
        return Err(CommandError::InvalidArguments(ADD_USAGE.into()));
    }

    let date = parse_date(args[0])?;
    let cash = parse_amount("cash", args[1])?;
    let card = parse_amount("card", args[2])?;
    let expenses = parse_amount("expenses", args[3])?;
    let note = if args.len() > 4 {
        Some(args[4..].join(" "))
    } else {
        None
    };

    Ok(SaleRecord::new(date, cash, card, expenses, note)?)
}

/// Interactive entry wizard: prompts each field, previews the computed
/// metrics, and asks for confirmation before anything is stored.
fn collect_record(context: &ShellContext) -> Result<Option<SaleRecord>, CommandError> {
    let theme = &context.theme;
    let date = cli_io::prompt_date(theme, "Date", Local::now().date_naive())?;
    let cash = cli_io::prompt_amount(theme, "Cash sales")?;
    let card = cli_io::prompt_amount(theme, "Card sales")?;
    let expenses = cli_io::prompt_amount(theme, "Expenses")?;
    let note = cli_io::prompt_optional_text(theme, "Note (optional)")?;

    let record = SaleRecord::new(date, cash, card, expenses, note)?;
    let metrics = record_metrics(&record);
    let symbol = &context.config.currency_symbol;
    output::blank_line();
    cli_io::print_info(format!("Gross sale:     {}", money(symbol, metrics.gross_sales)));
    cli_io::print_info(format!(
        "Net total:      {}",
        signed_money(symbol, metrics.net_total)
    ));
    cli_io::print_info(format!(
        "Cash remaining: {}",
        signed_money(symbol, metrics.cash_remaining)
    ));

    if cli_io::confirm_action(theme, "Save this record?", true)? {
        Ok(Some(record))
    } else {
        Ok(None)
    }
}

fn cmd_history(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.store.is_empty() {
        cli_io::print_info("No records yet. Use `add` to record a day.");
        return Ok(());
    }

    let symbol = context.config.currency_symbol.clone();
    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left("Date"),
        TableColumn::right("Total Sale"),
        TableColumn::right("Cash Left"),
        TableColumn::right("Card"),
        TableColumn::right("Expenses"),
        TableColumn::left("Note").capped(24),
    ]);
    for (position, record) in context.store.records().iter().enumerate() {
        let metrics = record_metrics(record);
        table.push_row(vec![
            (position + 1).to_string(),
            record.date.to_string(),
            money(&symbol, metrics.net_total),
            money(&symbol, metrics.cash_remaining),
            money(&symbol, record.card_sales),
            money(&symbol, record.expenses),
            record.note.clone().unwrap_or_default(),
        ]);
    }

    output::section("Sales History");
    output::render_block(table.render());
    cli_io::print_info(format!("{} record(s).", context.store.len()));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context.store.is_empty() {
        cli_io::print_info("No records to delete.");
        return Ok(());
    }

    let index = match args.first() {
        Some(raw) => position_from_arg(raw, context.store.len())?,
        None => match pick_record(context)? {
            Some(index) => index,
            None => {
                cli_io::print_info("Deletion cancelled.");
                return Ok(());
            }
        },
    };

    let (id, date) = {
        let record = &context.store.records()[index];
        (record.id, record.date)
    };

    if !context.confirm(&format!("Delete the record from {date}?"), false)? {
        cli_io::print_info("Deletion cancelled.");
        return Ok(());
    }

    if context.store.remove(id) {
        cli_io::print_success(format!("Deleted the record from {date}."));
        Ok(())
    } else {
        Err(CommandError::Message(format!(
            "The record from {date} was already gone."
        )))
    }
}

fn position_from_arg(raw: &str, len: usize) -> Result<usize, CommandError> {
    let position: usize = raw
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("`{raw}` is not a history position")))?;
    if position == 0 || position > len {
        return Err(CommandError::InvalidArguments(format!(
            "position {position} is out of range (1..={len})"
        )));
    }
    Ok(position - 1)
}

fn pick_record(context: &ShellContext) -> Result<Option<usize>, CommandError> {
    if context.mode != CliMode::Interactive {
        return Err(CommandError::InvalidArguments(
            "usage: delete <position>".into(),
        ));
    }

    let symbol = &context.config.currency_symbol;
    let labels: Vec<String> = context
        .store
        .records()
        .iter()
        .map(|record| {
            let metrics = record_metrics(record);
            match &record.note {
                Some(note) => format!(
                    "{} net {} ({note})",
                    record.date,
                    money(symbol, metrics.net_total)
                ),
                None => format!("{} net {}", record.date, money(symbol, metrics.net_total)),
            }
        })
        .collect();

    Ok(Select::with_theme(&context.theme)
        .with_prompt("Delete which record? (Esc cancels)")
        .items(&labels)
        .default(0)
        .interact_opt()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_form_builds_a_full_record() {
        let record = record_from_args(&["2024-05-06", "120", "80.5", "33", "rainy", "monday"])
            .unwrap();
        assert_eq!(record.cash_sales, 120.0);
        assert_eq!(record.card_sales, 80.5);
        assert_eq!(record.expenses, 33.0);
        assert_eq!(record.note.as_deref(), Some("rainy monday"));
    }

    #[test]
    fn args_form_without_note_leaves_it_empty() {
        let record = record_from_args(&["2024-05-06", "1", "2", "3"]).unwrap();
        assert_eq!(record.note, None);
    }

    #[test]
    fn short_args_form_is_rejected() {
        let err = record_from_args(&["2024-05-06", "1"]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
    }

    #[test]
    fn positions_are_one_based_and_bounded() {
        assert_eq!(position_from_arg("1", 3).unwrap(), 0);
        assert_eq!(position_from_arg("3", 3).unwrap(), 2);
        assert!(position_from_arg("0", 3).is_err());
        assert!(position_from_arg("4", 3).is_err());
        assert!(position_from_arg("abc", 3).is_err());
    }
}
