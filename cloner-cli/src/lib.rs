//! # Cloner CLI Library
//!
//! Command-line interface and orchestration for the cloner tool: argument
//! parsing, credential bootstrap, and the sequential clone loop over the
//! provider listing adapters.

pub mod cli;
pub mod clone;
pub mod consts;
pub mod creds;
pub mod run;
