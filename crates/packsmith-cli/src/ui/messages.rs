//! Status message functions for terminal output.
//!
//! Errors are not printed here; `main` reports them through miette.

use owo_colors::OwoColorize;

use super::colors_enabled;

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {message}");
    }
}
