//! Config command implementation.

use crate::cli::ConfigArgs;
use crate::config::CliSettings;
use crate::error::{Result, ResultExt};
use packsmith_config::discovery::load_file;
use packsmith_config::{ConfigOutput, InputDiscovery, ProjectLayout, create_config_from_value};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Execute the config command.
///
/// Loads the caller's options, layers the build flags on top, assembles
/// and prints the result to stdout. Failures are returned for `main` to
/// report; nothing is written to stdout in that case.
pub async fn execute(args: ConfigArgs) -> Result<()> {
    let json = render(&args)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Produce the JSON text `execute` would print.
pub fn render(args: &ConfigArgs) -> Result<String> {
    let layout = match &args.cwd {
        Some(dir) => ProjectLayout::new(dir),
        None => ProjectLayout::from_cwd()?,
    };

    let input = load_input(args.input.as_deref(), &layout)?;
    let settings = CliSettings::load(args)?;
    tracing::debug!(?settings, root = %layout.root().display(), "resolved build flags");

    let output = create_config_from_value(settings.apply_to(input)?, &layout)?;
    tracing::debug!(configs = output.configs().len(), "assembled configuration");

    to_json(&output, args.compact)
}

fn load_input(explicit: Option<&Path>, layout: &ProjectLayout) -> Result<Value> {
    if let Some(path) = explicit {
        let path = layout.resolve(path);
        tracing::debug!(path = %path.display(), "reading options file");
        return load_file(&path).with_path(&path);
    }

    Ok(InputDiscovery::new(layout.root()).load_value()?)
}

fn to_json(output: &ConfigOutput, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(output)?
    } else {
        serde_json::to_string_pretty(output)?
    };
    Ok(json)
}
