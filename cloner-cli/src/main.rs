//! # Cloner CLI Entry Point
//!
//! The main entry point for the cloner command-line tool, which bulk-clones
//! every repository the user owns on GitHub and Bitbucket.

use anyhow::Result;
use clap::Parser;
use cloner_cli::{cli, run};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
  let cmd = cli::Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  cmd.colors.apply();

  run::run(cmd.contains.as_deref().unwrap_or(""))
}
