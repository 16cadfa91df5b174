//! Interactive prompts with non-TTY guards.
//!
//! Every prompt refuses to run when stdin is not a terminal and reports
//! which flag to use instead, so scripted invocations fail loudly rather
//! than hanging on input.

use std::io::IsTerminal;

use anyhow::{anyhow, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Input, Password};

/// Whether prompts can be shown at all.
pub fn interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Prompt for a non-empty text value.
pub fn input(prompt: &str, default: Option<&str>) -> Result<String> {
    if !interactive() {
        return Err(anyhow!(
            "Interactive input required. Use flags or run on a TTY."
        ));
    }

    let theme = ColorfulTheme::default();
    let builder = Input::<String>::with_theme(&theme).with_prompt(prompt);

    let value = match default {
        Some(default) => builder.default(default.to_string()).interact_text()?,
        None => builder.interact_text()?,
    };

    Ok(value)
}

/// Prompt for a text value where an empty answer is meaningful.
pub fn input_optional(prompt: &str, default: &str) -> Result<String> {
    if !interactive() {
        return Err(anyhow!(
            "Interactive input required. Use flags or run on a TTY."
        ));
    }

    let theme = ColorfulTheme::default();
    let value = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(value)
}

/// Prompt for a port number, re-asking until the input parses.
pub fn input_port(prompt: &str, default: u16) -> Result<u16> {
    if !interactive() {
        return Err(anyhow!(
            "Interactive input required. Use flags or run on a TTY."
        ));
    }

    let theme = ColorfulTheme::default();
    let value = Input::<u16>::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact_text()?;

    Ok(value)
}

/// Prompt for a password twice, hidden.
pub fn password(prompt: &str) -> Result<String> {
    if !interactive() {
        return Err(anyhow!("Interactive password input required. Run on a TTY."));
    }

    let theme = ColorfulTheme::default();
    let value = Password::with_theme(&theme)
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    Ok(value)
}

/// Prompt for a yes/no answer.
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    if !interactive() {
        return Err(anyhow!(
            "Interactive confirmation required. Pass --yes or run on a TTY."
        ));
    }

    let theme = ColorfulTheme::default();
    let value = Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    Ok(value)
}

/// Prompt for a selection from a list, with type-to-filter.
pub fn fuzzy_select(prompt: &str, items: &[String]) -> Result<usize> {
    if !interactive() {
        return Err(anyhow!(
            "Interactive selection required. Pass a query or run on a TTY."
        ));
    }

    let theme = ColorfulTheme::default();
    let index = FuzzySelect::with_theme(&theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;

    Ok(index)
}
