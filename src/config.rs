use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlocScanError};

pub const DEFAULT_CONFIG_FILE: &str = ".sloc-scan.toml";

/// C-family languages where `//`, `/* */` and double-quoted strings apply.
fn default_extensions() -> Vec<String> {
    ["java", "c", "h", "cpp", "hpp", "cc", "cs", "go", "js", "ts", "rs"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directories to scan when no paths are given on the command line.
    #[serde(default)]
    pub include_paths: Vec<String>,

    #[serde(default)]
    pub exclude: ExcludeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExcludeConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            include_paths: Vec::new(),
            exclude: ExcludeConfig::default(),
        }
    }
}

impl Config {
    /// Check that every exclude pattern is a valid glob.
    ///
    /// # Errors
    /// Returns an error naming the first invalid pattern.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.exclude.patterns {
            globset::Glob::new(pattern).map_err(|e| SlocScanError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
        }
        Ok(())
    }
}

pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// defaults when no file exists.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file is missing or cannot be parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::default());
        }
        self.load_from_path(path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(SlocScanError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
