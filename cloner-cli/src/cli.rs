//! # Command Line Interface
//!
//! Defines the CLI structure for the cloner tool. The tool has a single
//! operation, so the flags live directly on the parser rather than behind
//! subcommands.

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};
use cloner_core::ColorMode;

/// Top-level CLI command for the cloner tool
#[derive(Parser)]
#[command(name = "cloner")]
#[command(about = "Clone all your repositories from GitHub and Bitbucket")]
#[command(
  long_about = "Cloner fetches every repository you own across GitHub and Bitbucket\n\
        into a local directory over authenticated SSH.\n\n\
        Credentials are read from ~/.clonerrc and collected interactively\n\
        (and saved) when missing. Repositories whose target directory already\n\
        exists are skipped."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Only clone repositories whose clone URL contains this substring
  #[arg(
    short = 'c',
    long = "contains",
    value_name = "SUBSTRING",
    long_help = "Only clone repositories whose clone URL contains this substring.\n\n\
             Matching is case-insensitive and applies to both GitHub and\n\
             Bitbucket listings. Without this flag every repository is cloned."
  )]
  pub contains: Option<String>,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,
}

#[cfg(test)]
mod tests {
  use clap::Parser;

  use super::*;

  #[test]
  fn test_parses_without_flags() {
    let cli = Cli::try_parse_from(["cloner"]).unwrap();
    assert_eq!(cli.contains, None);
    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.colors, ColorMode::Auto);
  }

  #[test]
  fn test_parses_contains_short_and_long() {
    let cli = Cli::try_parse_from(["cloner", "-c", "ban"]).unwrap();
    assert_eq!(cli.contains.as_deref(), Some("ban"));

    let cli = Cli::try_parse_from(["cloner", "--contains", "ban"]).unwrap();
    assert_eq!(cli.contains.as_deref(), Some("ban"));
  }

  #[test]
  fn test_counts_verbosity() {
    let cli = Cli::try_parse_from(["cloner", "-vvv"]).unwrap();
    assert_eq!(cli.verbose, 3);
  }

  #[test]
  fn test_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["cloner", "--bogus"]).is_err());
  }
}
