//! Caller-facing options for config assembly.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::entry::{EntryDescriptor, EntrySet};
use crate::error::{ConfigError, Result};

/// Flags forwarded by the bundler's command line.
///
/// A flag counts as set when it is present at all, whatever its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Argv {
    #[serde(default, deserialize_with = "present")]
    pub prod: bool,

    #[serde(default, deserialize_with = "present")]
    pub analyze: bool,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    Value::deserialize(deserializer)?;
    Ok(true)
}

/// Input to [`create_config`](crate::create_config).
#[derive(Debug, Clone, PartialEq)]
pub struct CreateConfigOptions {
    pub argv: Option<Argv>,
    pub entries: Option<EntrySet>,
    pub node_modules_to_babel: Vec<String>,
    pub use_https: bool,
    /// Extra compile-time constants, emitted after `process.env.NODE_ENV`.
    pub define: IndexMap<String, String>,
}

impl Default for CreateConfigOptions {
    fn default() -> Self {
        Self {
            argv: None,
            entries: None,
            node_modules_to_babel: Vec::new(),
            use_https: true,
            define: IndexMap::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawOptions {
    #[serde(default)]
    argv: Option<Argv>,

    #[serde(default)]
    entries: Option<IndexMap<String, Value>>,

    #[serde(default)]
    node_modules_to_babel: Option<Vec<String>>,

    #[serde(default)]
    use_https: Option<bool>,

    #[serde(default)]
    define: IndexMap<String, String>,
}

impl CreateConfigOptions {
    /// Parse caller-supplied JSON, keeping entry declaration order.
    ///
    /// # Example
    ///
    /// ```
    /// use packsmith_config::CreateConfigOptions;
    /// use serde_json::json;
    ///
    /// let options = CreateConfigOptions::from_value(json!({
    ///     "entries": {
    ///         "primary": "./scripts/index.js",
    ///         "styles": "./styles/styles.scss"
    ///     },
    ///     "useHttps": false
    /// })).unwrap();
    ///
    /// let keys: Vec<_> = options.entries.unwrap().keys().cloned().collect();
    /// assert_eq!(keys, ["primary", "styles"]);
    /// assert!(!options.use_https);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        let object = match &value {
            Value::Object(object) => object,
            Value::Null => return Ok(Self::default()),
            other => {
                return Err(ConfigError::InvalidValue(format!(
                    "options must be an object, found {other}"
                )))
            }
        };

        if object.get("env").is_some_and(|env| !env.is_null()) {
            return Err(ConfigError::MisplacedOptionField {
                field: "env",
                expected: "argv",
            });
        }

        let mut value = value;
        if let Value::Object(object) = &mut value {
            object.remove("env");
        }

        let raw: RawOptions =
            serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let entries = raw
            .entries
            .map(|entries| {
                entries
                    .iter()
                    .map(|(key, value)| Ok((key.clone(), EntryDescriptor::from_value(key, value)?)))
                    .collect::<Result<EntrySet>>()
            })
            .transpose()?;

        Ok(Self {
            argv: raw.argv,
            entries,
            node_modules_to_babel: raw.node_modules_to_babel.unwrap_or_default(),
            use_https: raw.use_https.unwrap_or(true),
            define: raw.define,
        })
    }

    /// Add an entry, keeping earlier entries first.
    pub fn with_entry(mut self, key: impl Into<String>, descriptor: EntryDescriptor) -> Self {
        self.entries
            .get_or_insert_with(EntrySet::new)
            .insert(key.into(), descriptor);
        self
    }

    pub fn build_options(&self) -> BuildOptions {
        let argv = self.argv.unwrap_or_default();
        BuildOptions {
            is_production: argv.prod,
            is_analyze: argv.analyze,
            use_https: self.use_https,
            node_modules_to_transpile: self.node_modules_to_babel.clone(),
            define: self.define.clone(),
        }
    }
}

/// Settings shared by every config produced in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub is_production: bool,
    pub is_analyze: bool,
    pub use_https: bool,
    pub node_modules_to_transpile: Vec<String>,
    pub define: IndexMap<String, String>,
}

impl BuildOptions {
    /// Development unless production was asked for.
    pub fn dev_mode(&self) -> bool {
        !self.is_production
    }
}
