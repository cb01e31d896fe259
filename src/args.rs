//! Command line interface

use clap::Parser;

/// Downloads the built-in list of spell-check dictionaries into the `dictionaries` directory.
///
/// The list of dictionaries and the target directory are fixed when the tool is built; there are no
/// options besides `--help` and `--version`.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct CliArguments {}
