//! Config assembly: one entry plan in, one bundler config out.

use serde::Serialize;
use serde_json::Value;

use crate::entry::{normalize_entry, NormalizedEntry};
use crate::error::{ConfigError, Result};
use crate::fragments::{
    common_settings, define_entry, define_output, dev_server_settings, rules_for_scripts,
    rules_for_styles, CommonSettings, DevServerSettings, ModuleRule, OutputSettings,
};
use crate::layout::{
    ProjectLayout, DEFAULT_ENTRY_FILE, DEFAULT_SCRIPTS_OUTPUT_FILENAME,
    DEFAULT_STYLES_OUTPUT_FILENAME, HTML_SHELL,
};
use crate::options::{BuildOptions, CreateConfigOptions};
use crate::plugin::{self, CopyPattern, PluginSpec};

/// Everything that varies between the configs of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryPlan {
    pub entry_file: String,
    pub script_output_name: String,
    pub style_output_name: String,
    pub plugins: Vec<PluginSpec>,
    pub ignored_outputs: Vec<String>,
    pub polyfill: bool,
    pub skip_linting: bool,
}

impl EntryPlan {
    /// Plan used when the caller declares no entries.
    pub fn default_build() -> Self {
        Self {
            entry_file: DEFAULT_ENTRY_FILE.to_string(),
            script_output_name: DEFAULT_SCRIPTS_OUTPUT_FILENAME.to_string(),
            style_output_name: DEFAULT_STYLES_OUTPUT_FILENAME.to_string(),
            plugins: Vec::new(),
            ignored_outputs: Vec::new(),
            polyfill: true,
            skip_linting: false,
        }
    }
}

impl From<NormalizedEntry> for EntryPlan {
    fn from(entry: NormalizedEntry) -> Self {
        Self {
            entry_file: entry.entry_file,
            script_output_name: entry.script_output_name,
            style_output_name: entry.style_output_name,
            plugins: entry.plugins,
            ignored_outputs: entry.ignored_outputs,
            polyfill: entry.polyfill,
            skip_linting: entry.skip_linting,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleSettings {
    pub rules: Vec<ModuleRule>,
}

/// A complete bundler configuration for one entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub entry: Vec<String>,
    pub output: OutputSettings,
    #[serde(flatten)]
    pub common: CommonSettings,
    pub dev_server: DevServerSettings,
    pub module: ModuleSettings,
    pub plugins: Vec<PluginSpec>,
}

impl ResolvedConfig {
    /// First plugin with the given name.
    pub fn plugin(&self, name: &str) -> Option<&PluginSpec> {
        self.plugins.iter().find(|p| p.name == name)
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

/// Result of [`create_config`]: a single config when no entries were
/// declared, otherwise one config per entry in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigOutput {
    Single(ResolvedConfig),
    Multiple(Vec<ResolvedConfig>),
}

impl ConfigOutput {
    pub fn configs(&self) -> &[ResolvedConfig] {
        match self {
            Self::Single(config) => std::slice::from_ref(config),
            Self::Multiple(configs) => configs,
        }
    }

    pub fn into_configs(self) -> Vec<ResolvedConfig> {
        match self {
            Self::Single(config) => vec![config],
            Self::Multiple(configs) => configs,
        }
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

/// Merge every fragment for one entry.
///
/// Plugins run lint, extract, optimize, copy, ignore, define, then the
/// analyzer when requested, then the entry's own plugins.
pub fn compose(build: &BuildOptions, layout: &ProjectLayout, plan: &EntryPlan) -> ResolvedConfig {
    let dev_mode = build.dev_mode();

    let mut rules = rules_for_scripts(
        layout,
        dev_mode,
        &build.node_modules_to_transpile,
        plan.skip_linting,
    );
    rules.extend(rules_for_styles(layout, dev_mode));

    let mut plugins = Vec::with_capacity(8 + plan.plugins.len());
    if !plan.skip_linting {
        plugins.push(plugin::lint_styles(layout));
    }
    plugins.push(plugin::extract_styles(&plan.style_output_name));
    plugins.push(plugin::optimize_styles(dev_mode));
    plugins.push(plugin::copy_files(
        layout,
        &[CopyPattern {
            from: HTML_SHELL,
            to: HTML_SHELL,
        }],
    ));
    plugins.push(plugin::ignore_outputs(&plan.ignored_outputs));
    plugins.push(plugin::define_constants(dev_mode, &build.define));
    if build.is_analyze {
        plugins.push(plugin::analyze_bundle());
    }
    plugins.extend(plan.plugins.iter().cloned());

    ResolvedConfig {
        entry: define_entry(plan.polyfill, &plan.entry_file),
        output: define_output(layout, &plan.script_output_name),
        common: common_settings(layout, dev_mode),
        dev_server: dev_server_settings(layout, dev_mode, build.use_https),
        module: ModuleSettings { rules },
        plugins,
    }
}

/// Build the bundler config(s) for `options`.
///
/// Every entry is validated before any config is composed, so an invalid
/// entry anywhere yields an error and nothing else.
///
/// # Example
///
/// ```
/// use packsmith_config::{create_config, ConfigOutput, CreateConfigOptions, ProjectLayout};
///
/// let layout = ProjectLayout::new("/project");
/// let output = create_config(&CreateConfigOptions::default(), &layout).unwrap();
///
/// let ConfigOutput::Single(config) = output else { panic!("expected one config") };
/// assert_eq!(config.entry, ["core-js/stable", "./scripts/index.js"]);
/// assert_eq!(config.output.filename, "./scripts/bundle.js");
/// ```
pub fn create_config(
    options: &CreateConfigOptions,
    layout: &ProjectLayout,
) -> Result<ConfigOutput> {
    let build = options.build_options();
    tracing::debug!(
        dev_mode = build.dev_mode(),
        analyze = build.is_analyze,
        https = build.use_https,
        root = %layout.root().display(),
        "assembling bundler config"
    );

    let Some(entries) = &options.entries else {
        let config = compose(&build, layout, &EntryPlan::default_build());
        return Ok(ConfigOutput::Single(config));
    };

    let plans = entries
        .iter()
        .map(|(key, descriptor)| normalize_entry(key, descriptor).map(EntryPlan::from))
        .collect::<Result<Vec<_>>>()?;

    let configs: Vec<ResolvedConfig> = plans
        .iter()
        .map(|plan| compose(&build, layout, plan))
        .collect();

    tracing::debug!(count = configs.len(), "assembled bundler configs");
    Ok(ConfigOutput::Multiple(configs))
}

/// Parse raw caller JSON and assemble it in one step.
pub fn create_config_from_value(value: Value, layout: &ProjectLayout) -> Result<ConfigOutput> {
    let options = CreateConfigOptions::from_value(value)?;
    create_config(&options, layout)
}
