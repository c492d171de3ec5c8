//! Fixed project layout the generated configs point at.
//!
//! Every absolute path a config contains is derived from a [`ProjectLayout`],
//! so the same options always produce the same paths for the same root.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::error::Result;

/// Entry used when the caller declares no entries.
pub const DEFAULT_ENTRY_FILE: &str = "./scripts/index.js";

/// Script bundle name used when the caller declares no entries.
pub const DEFAULT_SCRIPTS_OUTPUT_FILENAME: &str = "./scripts/bundle.js";

/// Style bundle name used when the caller declares no entries.
pub const DEFAULT_STYLES_OUTPUT_FILENAME: &str = "./styles/styles.css";

/// Extensions an entry path may end in.
pub const VALID_FILE_EXTENSIONS: [&str; 3] = [".js", ".scss", ".css"];

/// Module prepended to script entries that want polyfills.
pub const POLYFILLS_MODULE: &str = "core-js/stable";

/// HTML shell copied verbatim into the output root.
pub const HTML_SHELL: &str = "index.html";

/// Package whose `lib/` directory ships the shared lint and babel configs.
pub const DEFAULT_TOOLKIT_PACKAGE: &str = "packsmith";

/// Import aliases and the source subdirectory each one points at.
pub const SOURCE_ALIASES: [(&str, &str); 5] = [
    ("Assets", "assets"),
    ("Constants", "constants"),
    ("Data", "data"),
    ("Services", "services"),
    ("Styles", "styles"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    toolkit_package: String,
}

impl ProjectLayout {
    /// Anchor the layout at `root`.
    ///
    /// A relative root is made absolute against the process working
    /// directory, so every emitted path is absolute.
    ///
    /// # Example
    ///
    /// ```
    /// use packsmith_config::ProjectLayout;
    /// use std::path::PathBuf;
    ///
    /// let layout = ProjectLayout::new("/project");
    /// assert_eq!(layout.source_dir(), PathBuf::from("/project/src"));
    /// assert_eq!(layout.output_dir(), PathBuf::from("/project/dist"));
    /// ```
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: absolute(root.as_ref()).clean(),
            toolkit_package: DEFAULT_TOOLKIT_PACKAGE.to_string(),
        }
    }

    /// Anchor the layout at the process working directory.
    pub fn from_cwd() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Use a different package for the shared lint and babel configs.
    pub fn with_toolkit_package(mut self, name: impl Into<String>) -> Self {
        self.toolkit_package = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn toolkit_package(&self) -> &str {
        &self.toolkit_package
    }

    pub fn source_dir(&self) -> PathBuf {
        self.resolve("src")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve("dist")
    }

    pub fn styles_dir(&self) -> PathBuf {
        self.source_dir().join("styles")
    }

    pub fn node_modules_dir(&self) -> PathBuf {
        self.resolve("node_modules")
    }

    /// Location of an installed package, e.g. one that needs transpiling.
    pub fn node_module(&self, name: &str) -> PathBuf {
        self.node_modules_dir().join(name).clean()
    }

    pub fn toolkit_lib_dir(&self) -> PathBuf {
        self.node_module(&self.toolkit_package).join("lib")
    }

    pub fn eslint_config(&self) -> PathBuf {
        self.toolkit_lib_dir().join(".eslintrc")
    }

    pub fn stylelint_config(&self) -> PathBuf {
        self.toolkit_lib_dir().join(".stylelintrc")
    }

    pub fn babel_config(&self) -> PathBuf {
        self.toolkit_lib_dir().join("babel.config.js")
    }

    /// Resolve `relative` against the root, like `path.resolve` without
    /// touching the disk.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative).clean()
    }
}

/// `std::path::absolute` only fails for an empty path or an unreadable
/// working directory; the path is kept as given then.
fn absolute(root: &Path) -> PathBuf {
    std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf())
}
