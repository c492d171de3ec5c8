//! Terminal status output.
//!
//! All status lines go to stderr; stdout is reserved for command output.
//! The color decision is made once at startup by [`init_colors`] and shared
//! with the error reporter in `main`.
//!
//! # Examples
//!
//! ```no_run
//! use packsmith_cli::ui;
//!
//! ui::init_colors(false);
//! ui::warning("npm init is interactive and may wait for input");
//! ```

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::warning;

static COLORS: AtomicBool = AtomicBool::new(false);

/// Check if running in a CI environment.
///
/// Detects common CI environment variables from GitHub Actions, GitLab CI,
/// CircleCI and Travis CI.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// Check if colored status lines should be enabled.
///
/// # Environment Variables
///
/// - `NO_COLOR`: If set, disables colors
/// - `FORCE_COLOR`: If set, forces colors even when stderr is not a terminal
///
/// Otherwise colors follow whether stderr is attended by a user.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}

/// Decide once whether status lines and error reports are colored.
///
/// Call this early in `main`, after parsing arguments and before anything
/// is printed.
///
/// # Arguments
///
/// * `no_color` - The `--no-color` flag; when set, colors are off no matter
///   what the environment says
///
/// # Examples
///
/// ```no_run
/// use packsmith_cli::ui;
///
/// // Respect NO_COLOR / FORCE_COLOR / terminal detection
/// ui::init_colors(false);
///
/// // Plain text for logs and pipes
/// ui::init_colors(true);
/// assert!(!ui::colors_enabled());
/// ```
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

/// The decision made by the last [`init_colors`] call.
pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn ci_detected_from_github_actions() {
        unsafe { std::env::set_var("GITHUB_ACTIONS", "true") };
        assert!(is_ci());
        unsafe { std::env::remove_var("GITHUB_ACTIONS") };
    }

    #[test]
    #[serial]
    fn no_color_disables() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::remove_var("FORCE_COLOR");
        }
        assert!(!should_use_color());
        unsafe { std::env::remove_var("NO_COLOR") };
    }

    #[test]
    #[serial]
    fn force_color_enables() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_color());
        unsafe { std::env::remove_var("FORCE_COLOR") };
    }

    #[test]
    #[serial]
    fn no_color_flag_wins() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        init_colors(true);
        assert!(!colors_enabled());
        init_colors(false);
        assert!(colors_enabled());
        unsafe { std::env::remove_var("FORCE_COLOR") };
        init_colors(true);
    }
}
