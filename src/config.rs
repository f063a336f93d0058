//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.anchorlens.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
///
/// Verbosity is a CLI-only concern (`-v`/`-q`); the file covers discovery
/// and report settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Result file discovery settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Result file discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Directory searched for result files.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Result file name prefix.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Result file name suffix.
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            prefix: default_prefix(),
            suffix: default_suffix(),
        }
    }
}

fn default_dir() -> String {
    ".".to_string()
}

fn default_prefix() -> String {
    "angela-paris-test-results-".to_string()
}

fn default_suffix() -> String {
    ".json".to_string()
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How many title words to rank in the common-patterns section.
    #[serde(default = "default_top_words")]
    pub top_words: usize,

    /// Ranked words shorter than this many characters are not printed.
    #[serde(default = "default_min_word_display_len")]
    pub min_word_display_len: usize,

    /// Sample titles printed per facet bucket.
    #[serde(default = "default_sample_titles")]
    pub sample_titles: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_words: default_top_words(),
            min_word_display_len: default_min_word_display_len(),
            sample_titles: default_sample_titles(),
        }
    }
}

fn default_top_words() -> usize {
    10
}

fn default_min_word_display_len() -> usize {
    4
}

fn default_sample_titles() -> usize {
    3
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".anchorlens.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref dir) = args.dir {
            self.discovery.dir = dir.display().to_string();
        }

        if let Some(top_words) = args.top_words {
            self.report.top_words = top_words;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.discovery.dir, ".");
        assert_eq!(config.discovery.prefix, "angela-paris-test-results-");
        assert_eq!(config.discovery.suffix, ".json");
        assert_eq!(config.report.top_words, 10);
        assert_eq!(config.report.min_word_display_len, 4);
        assert_eq!(config.report.sample_titles, 3);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[discovery]
dir = "test-output"
prefix = "angela-nyc-test-results-"

[report]
top_words = 5
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.discovery.dir, "test-output");
        assert_eq!(config.discovery.prefix, "angela-nyc-test-results-");
        // Unset fields keep their defaults
        assert_eq!(config.discovery.suffix, ".json");
        assert_eq!(config.report.top_words, 5);
        assert_eq!(config.report.sample_titles, 3);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.starts_with("[discovery]"));
        assert!(toml_str.contains("[report]"));
        assert!(toml_str.contains("top_words = 10"));
    }

    #[test]
    fn test_parse_config_ignores_unknown_sections() {
        // Config files from older installs may carry extra tables.
        let toml_content = r#"
[general]
verbose = true

[report]
top_words = 7
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.report.top_words, 7);
        assert_eq!(config.discovery.dir, ".");
    }
}
