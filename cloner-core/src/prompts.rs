//! # Prompts Module
//!
//! Provides a custom dialoguer theme for consistent styling across cloner's
//! interactive prompts.

use console::Style;
use dialoguer::theme::ColorfulTheme;

/// Returns a custom dialoguer theme matching cloner's color palette.
///
/// Features:
/// - Cyan bold prompt text
/// - Green highlight on entered values
pub fn cloner_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    values_style: Style::new().green(),
    ..ColorfulTheme::default()
  }
}
