//! Logging setup for the Packsmith CLI.
//!
//! Everything goes to stderr. Stdout carries the generated configuration and
//! must stay valid JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! use packsmith_cli::logger::init_logger;
//! use tracing::debug;
//!
//! init_logger(true, false, false);
//! debug!(entries = 2, "assembling");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "packsmith=debug,packsmith_cli=debug,packsmith_config=debug";
const QUIET_FILTER: &str = "packsmith=error,packsmith_cli=error,packsmith_config=error";
const DEFAULT_FILTER: &str = "packsmith=warn,packsmith_cli=warn,packsmith_config=warn";

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs. Output
/// goes to stderr; stdout is left to the generated configuration.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable colored output
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for packsmith crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: WARN for packsmith crates
///
/// # Examples
///
/// ```rust,no_run
/// use packsmith_cli::logger::init_logger;
///
/// // Default logging (warnings and errors)
/// init_logger(false, false, false);
///
/// // Trace entry normalization and assembly
/// init_logger(true, false, false);
///
/// // Quiet mode, plain text for CI logs
/// init_logger(false, true, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(select_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
///
/// Useful for tests or embedding, where the filter is known up front. If a
/// global subscriber is already set, this call leaves it in place.
///
/// # Example
///
/// ```rust,no_run
/// use packsmith_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("packsmith_config=trace"), true);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored log output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise stderr
/// terminal capabilities decide.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn filters_parse() {
        for directive in [VERBOSE_FILTER, QUIET_FILTER, DEFAULT_FILTER] {
            assert!(EnvFilter::try_new(directive).is_ok(), "{directive}");
        }
    }

    #[test]
    #[serial]
    fn verbose_wins_over_env() {
        unsafe { std::env::set_var("RUST_LOG", "off") };
        let filter = select_filter(true, false);
        assert!(filter.to_string().contains("packsmith_config=debug"));
        unsafe { std::env::remove_var("RUST_LOG") };
    }

    #[test]
    #[serial]
    fn force_color_enables_colors() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_colors());
        unsafe { std::env::remove_var("FORCE_COLOR") };
    }

    #[test]
    #[serial]
    fn no_color_overrides_force() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_colors());
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logger(false, true, true);
        init_logger(true, false, true);
    }
}
