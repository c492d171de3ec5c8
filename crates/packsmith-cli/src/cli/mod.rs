//! Command-line interface definition for Packsmith.
//!
//! - `packsmith config` - print the assembled bundler configuration
//! - `packsmith init` - run `npm init` and relay its output

mod commands;

use clap::Parser;

pub use commands::{Command, ConfigArgs, InitArgs};

/// Packsmith - bundler configuration from a declarative entry map
#[derive(Parser, Debug)]
#[command(
    name = "packsmith",
    version,
    about = "Assemble bundler configurations from a declarative entry map",
    long_about = "Packsmith turns a small map of named entry files into complete bundler\n\
                  configurations: one per entry, with scripts linted and transpiled and\n\
                  styles compiled, extracted and optimized."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
