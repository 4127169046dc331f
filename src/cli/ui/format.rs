//! Money formatting for tables, charts, and summary panels.

use colored::Colorize;

/// Formats an amount with the configured currency symbol, two decimal
/// places, and thousands separators, e.g. `$1,234.50`.
pub fn money(symbol: &str, value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;
    let magnitude = format!("{symbol}{}.{fraction:02}", group_thousands(units));
    if negative {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

/// Money string colored by sign: green for non-negative, red otherwise.
pub fn signed_money(symbol: &str, value: f64) -> String {
    let text = money(symbol, value);
    if value < 0.0 {
        text.bright_red().to_string()
    } else {
        text.bright_green().to_string()
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
