//! Packsmith CLI entry point.

use clap::Parser;
use miette::Result;
use packsmith_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    error::install_report_handler(ui::colors_enabled());

    let result = match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args).await,
        cli::Command::Init(init_args) => commands::init_execute(init_args).await,
    };

    result.map_err(error::cli_error_to_miette)
}
