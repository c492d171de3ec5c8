//! Build flags layered from defaults, environment and command line.
//!
//! Priority: CLI > Environment (`PACKSMITH_PROD`, `PACKSMITH_ANALYZE`,
//! `PACKSMITH_HTTPS`) > Defaults.
//!
//! Only the scalar flags go through figment. Entry maps are read with
//! `serde_json` directly so their declaration order survives.

mod loading;
mod tests;

use serde::{Deserialize, Serialize};

/// Environment variable prefix for build flags.
pub const ENV_PREFIX: &str = "PACKSMITH_";

/// Effective build flags for one `packsmith config` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliSettings {
    /// Production build
    #[serde(default)]
    pub prod: bool,

    /// Append the bundle analyzer
    #[serde(default)]
    pub analyze: bool,

    /// Dev server over HTTPS
    #[serde(default = "default_https")]
    pub https: bool,
}

fn default_https() -> bool {
    true
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            prod: false,
            analyze: false,
            https: default_https(),
        }
    }
}

/// Flags given on the command line. Unset flags are skipped so they don't
/// mask lower layers.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prod: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyze: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https: Option<bool>,
}
