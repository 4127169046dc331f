//! Plain-text bar chart of recent daily performance.
//!
//! Each record gets a pair of horizontal bars, net sale above expenses,
//! both scaled against the largest magnitude in the window.

use colored::Colorize;

use crate::journal::{record_metrics, SaleRecord};

use super::format::money;

const BAR_WIDTH: usize = 32;

/// Renders the chart for a window of records already in chronological
/// order (oldest first), one sale/expense bar pair per day.
pub fn render(window: &[&SaleRecord], currency_symbol: &str) -> String {
    let mut max_magnitude = 0.0_f64;
    for record in window {
        let metrics = record_metrics(record);
        max_magnitude = max_magnitude
            .max(metrics.net_total.abs())
            .max(record.expenses.abs());
    }

    let mut lines = Vec::with_capacity(window.len() * 2);
    for record in window {
        let metrics = record_metrics(record);
        let label = record.date.format("%a %m-%d").to_string();
        lines.push(bar_line(
            &label,
            "sale",
            metrics.net_total,
            max_magnitude,
            currency_symbol,
            true,
        ));
        lines.push(bar_line(
            "",
            "expense",
            record.expenses,
            max_magnitude,
            currency_symbol,
            false,
        ));
    }
    lines.join("\n")
}

fn bar_line(
    label: &str,
    series: &str,
    value: f64,
    max_magnitude: f64,
    currency_symbol: &str,
    is_sale: bool,
) -> String {
    let padded = format!("{:<width$}", bar_cells(value, max_magnitude), width = BAR_WIDTH);
    let painted = if is_sale {
        padded.bright_cyan()
    } else {
        padded.bright_red()
    };
    format!(
        "{label:<10} {series:<8} {painted} {amount}",
        amount = money(currency_symbol, value)
    )
}

fn bar_cells(value: f64, max_magnitude: f64) -> String {
    if max_magnitude <= 0.0 {
        return String::new();
    }
    let ratio = (value.abs() / max_magnitude).clamp(0.0, 1.0);
    let mut filled = (ratio * BAR_WIDTH as f64).round() as usize;
    if value.abs() > 0.0 {
        filled = filled.max(1);
    }
    "█".repeat(filled)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(day: u32, cash: f64, card: f64, expenses: f64) -> SaleRecord {
        SaleRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            cash,
            card,
            expenses,
            None,
        )
        .unwrap()
    }

    #[test]
    fn scales_bars_to_the_window_maximum() {
        // net totals 100 and 50; the second sale bar is half as long
        let first = record(1, 100.0, 0.0, 0.0);
        let second = record(2, 50.0, 0.0, 0.0);
        let rendered = render(&[&first, &second], "$");

        let bar_lengths: Vec<usize> = rendered
            .lines()
            .map(|line| line.matches('█').count())
            .collect();
        assert_eq!(bar_lengths, vec![BAR_WIDTH, 0, BAR_WIDTH / 2, 0]);
    }

    #[test]
    fn nonzero_values_always_show_a_bar() {
        let big = record(1, 10_000.0, 0.0, 1.0);
        let rendered = render(&[&big], "$");

        let expense_line = rendered.lines().nth(1).unwrap();
        assert_eq!(expense_line.matches('█').count(), 1);
    }

    #[test]
    fn labels_each_day_once() {
        let first = record(4, 10.0, 0.0, 2.0);
        let rendered = render(&[&first], "$");

        let mut lines = rendered.lines();
        assert!(lines.next().unwrap().contains("03-04"));
        assert!(lines.next().unwrap().starts_with(' '));
    }

    #[test]
    fn amounts_appear_at_line_ends() {
        let first = record(7, 80.0, 20.0, 30.0);
        let rendered = render(&[&first], "$");

        assert!(rendered.lines().next().unwrap().ends_with("$70.00"));
        assert!(rendered.lines().nth(1).unwrap().ends_with("$30.00"));
    }

    #[test]
    fn all_zero_window_renders_empty_bars() {
        let quiet = record(9, 0.0, 0.0, 0.0);
        let rendered = render(&[&quiet], "$");

        assert_eq!(rendered.matches('█').count(), 0);
    }
}
