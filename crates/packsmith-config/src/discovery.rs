//! File-based input discovery for CLI use
//!
//! Finds the caller's assembler options on disk. Library users should build
//! [`CreateConfigOptions`] directly or go through `from_value`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::options::CreateConfigOptions;

/// Dedicated options file, checked before `package.json`.
pub const CONFIG_FILE_NAME: &str = "packsmith.config.json";

/// `package.json` field holding options when no dedicated file exists.
pub const PACKAGE_FIELD: &str = "packsmith";

/// The parts of a `package.json` the assembler reads.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDescriptor {
    pub options: Option<Value>,
}

impl PackageDescriptor {
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidPackage {
                path: path.to_path_buf(),
                reason: format!("invalid JSON: {e}"),
            })?;

        let Value::Object(mut fields) = parsed else {
            return Err(ConfigError::InvalidPackage {
                path: path.to_path_buf(),
                reason: "expected a JSON object".to_string(),
            });
        };

        let options = fields.remove(PACKAGE_FIELD).filter(|v| !v.is_null());

        Ok(Self { options })
    }
}

/// Where discovered options came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    ConfigFile(PathBuf),
    PackageJson(PathBuf),
}

impl InputSource {
    pub fn path(&self) -> &Path {
        match self {
            Self::ConfigFile(path) | Self::PackageJson(path) => path,
        }
    }
}

/// Searches a project root for assembler options.
///
/// # Example
///
/// ```no_run
/// use packsmith_config::InputDiscovery;
///
/// let discovery = InputDiscovery::new(".");
/// let options = discovery.load().unwrap();
/// ```
pub struct InputDiscovery {
    root: PathBuf,
}

impl InputDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Searches in this order:
    /// 1. packsmith.config.json
    /// 2. package.json (packsmith field)
    ///
    /// A `package.json` that exists but can't be read or parsed is an error,
    /// not a missing input.
    pub fn find(&self) -> Result<Option<InputSource>> {
        let config_path = self.root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Ok(Some(InputSource::ConfigFile(config_path)));
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() && PackageDescriptor::read(&pkg_path)?.options.is_some() {
            return Ok(Some(InputSource::PackageJson(pkg_path)));
        }

        Ok(None)
    }

    /// Load the raw options value; `Null` when nothing was found.
    pub fn load_value(&self) -> Result<Value> {
        match self.find()? {
            Some(source) => {
                tracing::debug!("Loading options from: {}", source.path().display());
                load_source(&source)
            }
            None => {
                tracing::debug!("No options found under {}", self.root.display());
                Ok(Value::Null)
            }
        }
    }

    /// Load and parse options; defaults when nothing was found.
    pub fn load(&self) -> Result<CreateConfigOptions> {
        CreateConfigOptions::from_value(self.load_value()?)
    }
}

/// Read the raw options value from a known source.
pub fn load_source(source: &InputSource) -> Result<Value> {
    match source {
        InputSource::ConfigFile(path) => read_json(path),
        InputSource::PackageJson(path) => Ok(PackageDescriptor::read(path)?
            .options
            .unwrap_or(Value::Null)),
    }
}

/// Read any JSON file; `package.json` files yield their packsmith field.
pub fn load_file(path: &Path) -> Result<Value> {
    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        return load_source(&InputSource::PackageJson(path.to_path_buf()));
    }
    load_source(&InputSource::ConfigFile(path.to_path_buf()))
}

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ConfigError::InvalidValue(format!("{}: {e}", path.display())))
}
