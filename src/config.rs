//! Builder configuration.

use crate::error::Error;
use serde::Deserialize;

/// Source-hosting prefix that entry filenames are appended to.
pub const DEFAULT_URL_ROOT: &str = "https://github.com/splunk/splunk-sdk-javascript/blob/master/";

/// Module that owns entries carrying no `module`/`globals` tag.
pub const DEFAULT_MODULE: &str = "Global";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    /// Prefix for each entry's `url`
    pub url_root: String,
    /// Fallback parent module name; must not be empty
    pub default_module: String,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            url_root: DEFAULT_URL_ROOT.to_string(),
            default_module: DEFAULT_MODULE.to_string(),
        }
    }
}

impl DocConfig {
    /// Decode a config from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let mut config: DocConfig = serde_json::from_str(json).map_err(Error::Config)?;
        if config.default_module.trim().is_empty() {
            config.default_module = DEFAULT_MODULE.to_string();
        }
        Ok(config)
    }

    pub fn with_url_root(mut self, url_root: impl Into<String>) -> Self {
        self.url_root = url_root.into();
        self
    }

    /// Blank names are ignored so entries always get a parent.
    pub fn with_default_module(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.default_module = name.trim().to_string();
        }
        self
    }
}
