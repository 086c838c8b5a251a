//! # Output Formatting
//!
//! Formatted output helpers for user-facing messages, and the per-repository
//! status token the clone loop prints right-aligned at the terminal edge.

use console::Term;
use owo_colors::OwoColorize;

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the color mode process-wide
  pub fn apply(self) {
    match self {
      ColorMode::Yes | ColorMode::Always => owo_colors::set_override(true),
      ColorMode::No | ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Auto => {}
    }
  }
}

/// Terminal outcome of one clone attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneStatus {
  Ok,
  Skip,
  Failed,
}

impl CloneStatus {
  /// Fixed-width status token, always six characters
  fn token(self) -> &'static str {
    match self {
      CloneStatus::Ok => "  OK  ",
      CloneStatus::Skip => " SKIP ",
      CloneStatus::Failed => "FAILED",
    }
  }
}

// Visible width of the bracketed token: "[ " + token + " ]"
const STATUS_BLOCK_WIDTH: usize = 10;

/// Print a success message
pub fn print_success(message: &str) {
  println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  println!("{} {}", "ℹ".blue().bold(), message);
}

/// Finish a status line by printing the bracketed token at the right edge.
///
/// `written` is the count of characters already printed on the line; the
/// token is padded so its closing bracket lands on the last column of the
/// terminal (width 80 when no terminal is attached).
pub fn print_status(status: CloneStatus, written: usize) {
  let columns = Term::stdout()
    .size_checked()
    .map(|(_, columns)| columns as usize)
    .unwrap_or(80);

  let padding = status_padding(columns, written);
  let token = match status {
    CloneStatus::Ok => status.token().green().bold().to_string(),
    CloneStatus::Skip => status.token().yellow().bold().to_string(),
    CloneStatus::Failed => status.token().red().bold().to_string(),
  };

  println!("{}{}{}{}", " ".repeat(padding), "[ ".bold(), token, " ]".bold());
}

/// Spaces between the text already on the line and the status block.
///
/// Always at least one space, even when the line is wider than the terminal.
fn status_padding(columns: usize, written: usize) -> usize {
  columns.saturating_sub(written + STATUS_BLOCK_WIDTH).max(1)
}
