use std::path::PathBuf;

use serde::Serialize;
use serde_json::{json, Value};

use crate::layout::ProjectLayout;

/// Loader applied to files matching `test`.
///
/// `test` holds regular-expression source; the consumer compiles it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleRule {
    pub test: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce: Option<Enforce>,

    pub include: Vec<PathBuf>,

    #[serde(skip_serializing_if = "Value::is_null")]
    pub options: Value,

    #[serde(rename = "use", skip_serializing_if = "Vec::is_empty")]
    pub use_loaders: Vec<LoaderUse>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    Pre,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderUse {
    pub loader: String,
    pub options: Value,
}

impl LoaderUse {
    fn new(loader: &str, options: Value) -> Self {
        Self {
            loader: loader.to_string(),
            options,
        }
    }
}

/// Lint (unless skipped) then transpile.
///
/// Transpiling covers the source root plus each listed package under
/// `node_modules`, in the order given.
pub fn rules_for_scripts(
    layout: &ProjectLayout,
    dev_mode: bool,
    babel_include: &[String],
    skip_linting: bool,
) -> Vec<ModuleRule> {
    let source = layout.source_dir();
    let mut rules = Vec::with_capacity(2);

    if !skip_linting {
        rules.push(ModuleRule {
            test: r"\.js$".to_string(),
            loader: Some("eslint-loader".to_string()),
            enforce: Some(Enforce::Pre),
            include: vec![source.clone()],
            options: json!({
                "configFile": layout.eslint_config(),
                "fix": true,
                "cache": dev_mode,
            }),
            use_loaders: Vec::new(),
        });
    }

    let include = std::iter::once(source)
        .chain(babel_include.iter().map(|name| layout.node_module(name)))
        .collect();

    rules.push(ModuleRule {
        test: r"\.js$".to_string(),
        loader: Some("babel-loader".to_string()),
        enforce: None,
        include,
        options: json!({ "configFile": layout.babel_config() }),
        use_loaders: Vec::new(),
    });

    rules
}

/// Extract, then css, then vendor prefixes, then sass, scoped to the styles
/// directory. Loaders listed first run last.
pub fn rules_for_styles(layout: &ProjectLayout, dev_mode: bool) -> Vec<ModuleRule> {
    vec![ModuleRule {
        test: r"\.(scss|css)$".to_string(),
        loader: None,
        enforce: None,
        include: vec![layout.styles_dir()],
        options: Value::Null,
        use_loaders: vec![
            LoaderUse::new(
                "extract-css-chunks-webpack-plugin/dist/loader",
                json!({ "hot": dev_mode }),
            ),
            LoaderUse::new("css-loader", json!({ "url": false })),
            LoaderUse::new("postcss-loader", json!({ "plugins": ["autoprefixer"] })),
            LoaderUse::new(
                "sass-loader",
                json!({
                    "implementation": "sass",
                    "sassOptions": { "fiber": "fibers" },
                }),
            ),
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_linting_omits_lint_rule() {
        let layout = ProjectLayout::new("/project");
        let rules = rules_for_scripts(&layout, true, &[], true);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].loader.as_deref(), Some("babel-loader"));
    }

    #[test]
    fn lint_rule_runs_first_as_pre_loader() {
        let layout = ProjectLayout::new("/project");
        let rules = rules_for_scripts(&layout, true, &[], false);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].loader.as_deref(), Some("eslint-loader"));
        assert_eq!(rules[0].enforce, Some(Enforce::Pre));
        assert_eq!(
            rules[0].options["configFile"],
            json!("/project/node_modules/packsmith/lib/.eslintrc")
        );
    }

    #[test]
    fn babel_include_appends_node_modules() {
        let layout = ProjectLayout::new("/project");
        let rules = rules_for_scripts(
            &layout,
            false,
            &["swiper".to_string(), "@scope/dom7".to_string()],
            true,
        );
        assert_eq!(
            rules[0].include,
            vec![
                PathBuf::from("/project/src"),
                PathBuf::from("/project/node_modules/swiper"),
                PathBuf::from("/project/node_modules/@scope/dom7"),
            ]
        );
    }

    #[test]
    fn style_pipeline_order_is_fixed() {
        let layout = ProjectLayout::new("/project");
        let rules = rules_for_styles(&layout, false);
        let loaders: Vec<_> = rules[0]
            .use_loaders
            .iter()
            .map(|l| l.loader.as_str())
            .collect();
        assert_eq!(
            loaders,
            vec![
                "extract-css-chunks-webpack-plugin/dist/loader",
                "css-loader",
                "postcss-loader",
                "sass-loader"
            ]
        );
        assert_eq!(rules[0].include, vec![PathBuf::from("/project/src/styles")]);
        assert_eq!(rules[0].use_loaders[0].options, json!({ "hot": false }));
    }

    #[test]
    fn style_rule_serializes_use_key() {
        let layout = ProjectLayout::new("/project");
        let value = serde_json::to_value(&rules_for_styles(&layout, true)[0]).unwrap();
        assert!(value.get("use").is_some());
        assert!(value.get("loader").is_none());
        assert!(value.get("options").is_none());
        assert_eq!(value["test"], json!(r"\.(scss|css)$"));
    }
}
