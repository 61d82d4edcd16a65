//! Interactive language selection.

use anyhow::Result;
use dialoguer::{Select, theme::ColorfulTheme};
use locount_engine::Language;

/// Ask which language to count. Defaults to `All`.
///
/// # Errors
///
/// Fails when the terminal cannot be driven interactively.
pub fn choose_language() -> Result<Language> {
    let choices = Language::choices();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a language to count (or All)")
        .default(0)
        .items(&choices)
        .interact()?;
    Ok(choices[index])
}
