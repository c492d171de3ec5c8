use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Packsmith subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the assembled configuration as JSON
    ///
    /// Reads options from --input, or from packsmith.config.json, or from the
    /// "packsmith" field of package.json. With no input at all the default
    /// single build is printed.
    Config(ConfigArgs),

    /// Run `npm init` in the current directory
    ///
    /// The child's stdout and stderr are forwarded to stdout.
    Init(InitArgs),
}

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Options file (JSON object, or a package.json with a "packsmith" field)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Project root that paths are resolved against
    ///
    /// Defaults to the current working directory.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Production build: no linter cache, no source maps, minified styles
    #[arg(long)]
    pub prod: bool,

    /// Add the bundle analyzer plugin
    #[arg(long)]
    pub analyze: bool,

    /// Serve the dev server over plain HTTP
    #[arg(long)]
    pub no_https: bool,

    /// Print single-line JSON instead of pretty output
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the init command
#[derive(Args, Debug, Default)]
pub struct InitArgs {}
