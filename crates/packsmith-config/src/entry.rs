//! Entry descriptors and their normalization.
//!
//! Callers describe each entry either as a bare path or as an explicit
//! record. Normalization validates the path's extension, fills in defaults,
//! and derives the per-entry output names.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::layout::VALID_FILE_EXTENSIONS;
use crate::plugin::PluginSpec;

/// Entry key to descriptor, in declaration order.
pub type EntrySet = IndexMap<String, EntryDescriptor>;

#[derive(Debug, Clone, PartialEq)]
pub enum EntryDescriptor {
    /// Bare path; everything else takes its default.
    Shorthand(String),
    Explicit {
        path: String,
        plugins: Vec<PluginSpec>,
        polyfill: bool,
        skip_linting: bool,
    },
}

impl EntryDescriptor {
    /// Explicit descriptor with default plugins, polyfill and linting.
    pub fn explicit(path: impl Into<String>) -> Self {
        Self::Explicit {
            path: path.into(),
            plugins: Vec::new(),
            polyfill: true,
            skip_linting: false,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Shorthand(path) => path,
            Self::Explicit { path, .. } => path,
        }
    }

    /// Read a descriptor from caller-supplied JSON.
    ///
    /// A string is a shorthand path. An object must carry `file` (or `path`)
    /// and may carry `plugins`, `polyfill` and `skipLinting`.
    ///
    /// # Example
    ///
    /// ```
    /// use packsmith_config::EntryDescriptor;
    /// use serde_json::json;
    ///
    /// let entry = EntryDescriptor::from_value("nopoly", &json!({
    ///     "file": "./scripts/index.js",
    ///     "polyfill": false
    /// })).unwrap();
    /// assert_eq!(entry.path(), "./scripts/index.js");
    /// ```
    pub fn from_value(key: &str, value: &Value) -> Result<Self> {
        let record = match value {
            Value::String(path) => return Ok(Self::Shorthand(path.clone())),
            Value::Object(record) => record,
            other => {
                return Err(ConfigError::InvalidEntry {
                    key: key.to_string(),
                    reason: format!("expected a path or an entry record, found {other}"),
                })
            }
        };

        let path = match record.get("file").or_else(|| record.get("path")) {
            Some(Value::String(path)) => path.clone(),
            Some(other) => {
                return Err(ConfigError::InvalidEntry {
                    key: key.to_string(),
                    reason: format!("file must be a string, found {other}"),
                })
            }
            None => {
                return Err(ConfigError::InvalidEntry {
                    key: key.to_string(),
                    reason: "entry record has no file".to_string(),
                })
            }
        };

        let plugins = match record.get("plugins") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    serde_json::from_value(item.clone()).map_err(|err| {
                        ConfigError::InvalidPluginList {
                            key: key.to_string(),
                            found: format!("{item} ({err})"),
                        }
                    })
                })
                .collect::<Result<Vec<PluginSpec>>>()?,
            Some(other) => {
                return Err(ConfigError::InvalidPluginList {
                    key: key.to_string(),
                    found: other.to_string(),
                })
            }
        };

        Ok(Self::Explicit {
            path,
            plugins,
            polyfill: read_flag(key, record, "polyfill", true)?,
            skip_linting: read_flag(key, record, "skipLinting", false)?,
        })
    }
}

fn read_flag(
    key: &str,
    record: &serde_json::Map<String, Value>,
    field: &str,
    default: bool,
) -> Result<bool> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(other) => Err(ConfigError::InvalidEntry {
            key: key.to_string(),
            reason: format!("{field} must be a boolean, found {other}"),
        }),
    }
}

/// A validated entry with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEntry {
    pub key: String,
    pub entry_file: String,
    pub extension: String,
    pub script_output_name: String,
    pub style_output_name: String,
    pub plugins: Vec<PluginSpec>,
    pub polyfill: bool,
    pub skip_linting: bool,
    /// Outputs the bundler must not emit.
    pub ignored_outputs: Vec<String>,
}

impl NormalizedEntry {
    /// Whether the entry produces a script bundle worth emitting.
    pub fn emits_script(&self) -> bool {
        self.extension == ".js"
    }
}

/// Trailing `.` plus one or more ASCII alphanumerics, matched
/// case-insensitively.
///
/// # Example
///
/// ```
/// use packsmith_config::file_extension;
///
/// assert_eq!(file_extension("./styles/main.scss"), Some(".scss"));
/// assert_eq!(file_extension("./scripts/index"), None);
/// ```
pub fn file_extension(path: &str) -> Option<&str> {
    let dot = path.rfind('.')?;
    let suffix = &path[dot + 1..];
    if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Some(&path[dot..])
    } else {
        None
    }
}

/// Validate one entry and derive its output names.
///
/// Fails with `MissingExtension` when the path has no suffix and with
/// `UnsupportedExtension` when the suffix is not `.js`, `.scss` or `.css`.
pub fn normalize_entry(key: &str, descriptor: &EntryDescriptor) -> Result<NormalizedEntry> {
    let path = descriptor.path();
    let extension = file_extension(path).ok_or_else(|| ConfigError::MissingExtension {
        key: key.to_string(),
        path: path.to_string(),
    })?;

    if !VALID_FILE_EXTENSIONS.contains(&extension) {
        return Err(ConfigError::UnsupportedExtension {
            key: key.to_string(),
            extension: extension.to_string(),
            path: path.to_string(),
        });
    }

    let (plugins, polyfill, skip_linting) = match descriptor {
        EntryDescriptor::Shorthand(_) => (Vec::new(), true, false),
        EntryDescriptor::Explicit {
            plugins,
            polyfill,
            skip_linting,
            ..
        } => (plugins.clone(), *polyfill, *skip_linting),
    };

    let script_output_name = format!("{key}.js");
    let ignored_outputs = if extension == ".js" {
        Vec::new()
    } else {
        vec![script_output_name.clone()]
    };

    let entry = NormalizedEntry {
        key: key.to_string(),
        entry_file: path.to_string(),
        extension: extension.to_string(),
        script_output_name,
        style_output_name: format!("{key}.css"),
        plugins,
        polyfill,
        skip_linting,
        ignored_outputs,
    };

    tracing::debug!(
        key,
        file = %entry.entry_file,
        extension = %entry.extension,
        polyfill,
        skip_linting,
        "normalized entry"
    );

    Ok(entry)
}
