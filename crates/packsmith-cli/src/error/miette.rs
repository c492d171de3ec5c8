//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::{MietteHandlerOpts, Report};

/// Install the report handler `main` renders errors with.
///
/// With colors on, the graphical handler prints the error in red. Lines are
/// not wrapped so messages stay greppable.
pub fn install_report_handler(color: bool) {
    // Only the first install wins; later calls are no-ops.
    let _ = miette::set_hook(Box::new(move |_| {
        Box::new(
            MietteHandlerOpts::new()
                .color(color)
                .wrap_lines(false)
                .build(),
        )
    }));
}

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Entry errors get a hint naming the rule that was broken.
fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::MissingExtension { .. } | ConfigError::UnsupportedExtension { .. } => {
            miette::miette!(
                help = "Entry paths must end in .js, .scss or .css",
                "{}",
                err
            )
        }
        ConfigError::InvalidPluginList { .. } => {
            miette::miette!(help = "`plugins` must be a list of plugin descriptors", "{}", err)
        }
        ConfigError::MisplacedOptionField { .. } => {
            miette::miette!(help = "Bundler flags belong under `argv`", "{}", err)
        }
        _ => miette::miette!("Configuration error: {}", err),
    }
}
