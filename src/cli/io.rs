//! Console I/O helpers shared by the shell commands.

use std::fmt::Display;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use super::core::CommandError;
use super::output;

pub(crate) fn print_info(message: impl Display) {
    output::info(message);
}

pub(crate) fn print_success(message: impl Display) {
    output::success(message);
}

pub(crate) fn print_warning(message: impl Display) {
    output::warning(message);
}

pub(crate) fn print_error(message: impl Display) {
    output::error(message);
}

pub(crate) fn print_hint(message: impl Display) {
    output::hint(message);
}

pub(crate) fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Ok(Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompts for a calendar date, defaulting to the value passed in.
pub(crate) fn prompt_date(
    theme: &ColorfulTheme,
    prompt: &str,
    default: NaiveDate,
) -> Result<NaiveDate, CommandError> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .default(default.format("%Y-%m-%d").to_string())
        .validate_with(|input: &String| -> Result<(), &str> {
            NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| "enter a date as YYYY-MM-DD")
        })
        .interact_text()?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidArguments(format!("`{raw}` is not a valid date")))
}

/// Prompts for a non-negative money amount, defaulting to zero.
pub(crate) fn prompt_amount(theme: &ColorfulTheme, prompt: &str) -> Result<f64, CommandError> {
    Ok(Input::with_theme(theme)
        .with_prompt(prompt)
        .default(0.0)
        .validate_with(|input: &f64| -> Result<(), &str> {
            if !input.is_finite() {
                Err("enter a finite amount")
            } else if *input < 0.0 {
                Err("amounts cannot be negative")
            } else {
                Ok(())
            }
        })
        .interact_text()?)
}

/// Prompts for free-form text; an empty reply becomes `None`.
pub(crate) fn prompt_optional_text(
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<String>, CommandError> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
