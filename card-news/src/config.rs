//! Configuration file support for card-news.
//!
//! Loads an optional `card-news.toml` from the working directory, or an
//! explicit file passed with `--config`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::{CardNewsError, Result};
use crate::styles::HomeStyles;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "card-news.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardNewsConfig {
    /// JSON dataset to render instead of the built-in one
    pub data: Option<PathBuf>,
    /// Output file; stdout when unset
    pub output: Option<PathBuf>,
    /// Inline the stylesheet into `<head>`
    pub inline_css: bool,
    /// Class-name overrides keyed by CSS-module key
    pub styles: BTreeMap<String, String>,
}

impl Default for CardNewsConfig {
    fn default() -> Self {
        Self {
            data: None,
            output: None,
            inline_css: true,
            styles: BTreeMap::new(),
        }
    }
}

impl CardNewsConfig {
    /// Load `card-news.toml` from the given directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, cause = ?std::error::Error::source(&e), "using default config");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Missing or invalid files are errors.
    ///
    /// Relative `data`/`output` paths are resolved against the config
    /// file's directory.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CardNewsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| CardNewsError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(match path.parent() {
            Some(base) => config.relative_to(base),
            None => config,
        })
    }

    fn relative_to(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.data = self.data.map(resolve);
        self.output = self.output.map(resolve);
        self
    }

    /// Built-in class map with this config's overrides applied.
    pub fn home_styles(&self) -> HomeStyles {
        HomeStyles::default().with_overrides(&self.styles)
    }
}
