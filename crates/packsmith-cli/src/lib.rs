//! Packsmith CLI - bundler configs from a declarative entry map.
//!
//! The binary is a thin shell over `packsmith-config`: it finds the caller's
//! options, layers command-line flags on top, and prints the assembled
//! configuration as JSON.
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `config` and `init` implementations
//! - [`config`] - flag layering with figment
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing setup (stderr only)
//! - [`ui`] - colored status lines
//!
//! # Example
//!
//! ```rust
//! use packsmith_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
