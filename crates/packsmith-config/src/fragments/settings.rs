use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::layout::{ProjectLayout, POLYFILLS_MODULE, SOURCE_ALIASES};

/// Module specifiers for the `entry` field, polyfills first when wanted.
pub fn define_entry(polyfill: bool, entry_file: &str) -> Vec<String> {
    if polyfill {
        vec![POLYFILLS_MODULE.to_string(), entry_file.to_string()]
    } else {
        vec![entry_file.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSettings {
    pub path: PathBuf,
    pub filename: String,
}

pub fn define_output(layout: &ProjectLayout, filename: &str) -> OutputSettings {
    OutputSettings {
        path: layout.output_dir(),
        filename: filename.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

/// Script source maps: `eval` in development, none in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMapStyle {
    Eval,
    Disabled,
}

impl Serialize for SourceMapStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Eval => serializer.serialize_str("eval"),
            Self::Disabled => serializer.serialize_bool(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceHints {
    Off,
    Warning,
}

impl Serialize for PerformanceHints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Off => serializer.serialize_bool(false),
            Self::Warning => serializer.serialize_str("warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceSettings {
    pub hints: PerformanceHints,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveSettings {
    pub extensions: Vec<String>,
    pub alias: IndexMap<String, PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonSettings {
    pub mode: Mode,
    pub context: PathBuf,
    pub resolve: ResolveSettings,
    pub devtool: SourceMapStyle,
    pub performance: PerformanceSettings,
    pub stats: String,
}

pub fn common_settings(layout: &ProjectLayout, dev_mode: bool) -> CommonSettings {
    let source = layout.source_dir();
    let alias = SOURCE_ALIASES
        .iter()
        .map(|(name, dir)| (name.to_string(), source.join(dir)))
        .collect();

    CommonSettings {
        mode: if dev_mode {
            Mode::Development
        } else {
            Mode::Production
        },
        context: source,
        resolve: ResolveSettings {
            extensions: vec![".js".to_string()],
            alias,
        },
        devtool: if dev_mode {
            SourceMapStyle::Eval
        } else {
            SourceMapStyle::Disabled
        },
        performance: PerformanceSettings {
            hints: if dev_mode {
                PerformanceHints::Off
            } else {
                PerformanceHints::Warning
            },
        },
        stats: "normal".to_string(),
    }
}

/// Present in every config; the bundler only reads it when serving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerSettings {
    pub content_base: PathBuf,
    pub hot: bool,
    pub history_api_fallback: bool,
    pub https: bool,
}

pub fn dev_server_settings(
    layout: &ProjectLayout,
    dev_mode: bool,
    use_https: bool,
) -> DevServerSettings {
    DevServerSettings {
        content_base: layout.output_dir(),
        hot: dev_mode,
        history_api_fallback: true,
        https: use_https,
    }
}
