//! Build-step descriptors emitted into the plugin list.
//!
//! A [`PluginSpec`] names a bundler plugin and carries the options it is
//! constructed with. The assembler only creates and orders these; whatever
//! consumes the config instantiates the real plugin.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::layout::ProjectLayout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSpec {
    #[serde(rename = "plugin")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginSpec {
    pub fn new(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

/// Source and destination of one file copied into the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPattern<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

pub fn lint_styles(layout: &ProjectLayout) -> PluginSpec {
    PluginSpec::new(
        "StylelintPlugin",
        json!({
            "configFile": layout.stylelint_config(),
            "fix": true,
            "allowEmptyInput": true,
        }),
    )
}

pub fn extract_styles(style_output_filename: &str) -> PluginSpec {
    PluginSpec::new(
        "ExtractCssChunksPlugin",
        json!({
            "filename": style_output_filename,
            "chunkFilename": "[id].css",
        }),
    )
}

/// Minify in production; inline source maps and annotations follow the mode.
pub fn optimize_styles(dev_mode: bool) -> PluginSpec {
    PluginSpec::new(
        "OptimizeCssAssetsPlugin",
        json!({
            "cssProcessorOptions": {
                "minimize": !dev_mode,
                "map": { "inline": !dev_mode, "annotation": dev_mode },
            },
        }),
    )
}

/// `from` resolves under the source root, `to` under the output root.
pub fn copy_files(layout: &ProjectLayout, patterns: &[CopyPattern<'_>]) -> PluginSpec {
    let source = layout.source_dir();
    let output = layout.output_dir();
    let patterns: Vec<Value> = patterns
        .iter()
        .map(|pattern| {
            json!({
                "from": resolve_under(&source, pattern.from),
                "to": resolve_under(&output, pattern.to),
            })
        })
        .collect();

    PluginSpec::new(
        "CopyPlugin",
        json!({ "patterns": patterns, "info": true }),
    )
}

pub fn ignore_outputs(filenames: &[String]) -> PluginSpec {
    PluginSpec::new("IgnoreEmitPlugin", json!({ "filenames": filenames }))
}

/// `process.env.NODE_ENV` first, then caller constants in their given order.
/// Values are source text, so string constants carry their own quotes.
pub fn define_constants(dev_mode: bool, extra: &IndexMap<String, String>) -> PluginSpec {
    let mode = if dev_mode { "development" } else { "production" };
    let mut definitions = serde_json::Map::new();
    definitions.insert(
        "process.env.NODE_ENV".to_string(),
        Value::String(format!("\"{mode}\"")),
    );
    for (name, value) in extra {
        definitions.insert(name.clone(), Value::String(value.clone()));
    }

    PluginSpec::new("DefinePlugin", Value::Object(definitions))
}

pub fn analyze_bundle() -> PluginSpec {
    PluginSpec::new(
        "BundleAnalyzerPlugin",
        json!({ "analyzerMode": "static", "openAnalyzer": false }),
    )
}

fn resolve_under(base: &Path, relative: &str) -> PathBuf {
    base.join(relative).clean()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_serializes_with_plugin_key() {
        let spec = extract_styles("main.css");
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["plugin"], json!("ExtractCssChunksPlugin"));
        assert_eq!(value["options"]["filename"], json!("main.css"));
        assert_eq!(value["options"]["chunkFilename"], json!("[id].css"));
    }

    #[test]
    fn optimize_styles_tracks_mode() {
        let dev = optimize_styles(true);
        assert_eq!(dev.options["cssProcessorOptions"]["minimize"], json!(false));
        assert_eq!(dev.options["cssProcessorOptions"]["map"]["annotation"], json!(true));

        let prod = optimize_styles(false);
        assert_eq!(prod.options["cssProcessorOptions"]["minimize"], json!(true));
        assert_eq!(prod.options["cssProcessorOptions"]["map"]["inline"], json!(true));
    }

    #[test]
    fn copy_files_resolves_against_roots() {
        let layout = ProjectLayout::new("/project");
        let spec = copy_files(
            &layout,
            &[CopyPattern {
                from: "index.html",
                to: "index.html",
            }],
        );
        assert_eq!(
            spec.options["patterns"][0]["from"],
            json!("/project/src/index.html")
        );
        assert_eq!(
            spec.options["patterns"][0]["to"],
            json!("/project/dist/index.html")
        );
    }

    #[test]
    fn define_constants_keeps_node_env_first() {
        let mut extra = IndexMap::new();
        extra.insert("API_URL".to_string(), "\"https://api.test\"".to_string());
        let spec = define_constants(false, &extra);
        let keys: Vec<_> = spec.options.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["process.env.NODE_ENV", "API_URL"]);
        assert_eq!(spec.options["process.env.NODE_ENV"], json!("\"production\""));
    }

    #[test]
    fn caller_spec_without_options_round_trips() {
        let spec: PluginSpec = serde_json::from_value(json!({ "plugin": "Noop" })).unwrap();
        assert_eq!(spec.name, "Noop");
        assert!(spec.options.is_null());
        assert_eq!(serde_json::to_value(&spec).unwrap(), json!({ "plugin": "Noop" }));
    }
}
