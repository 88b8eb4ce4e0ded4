//! Engine configuration via `sift.toml`
//!
//! Every field has a default, so an empty or partial file is valid. The
//! defaults reproduce the plain engine behavior: empty tokens are indexed
//! and match records read `Found in file: <name>`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up by callers that keep settings on disk.
pub const CONFIG_FILE_NAME: &str = "sift.toml";

/// Prefix of a formatted match record when none is configured.
pub const DEFAULT_MATCH_PREFIX: &str = "Found in file: ";

/// Search engine configuration loaded from `sift.toml`.
///
/// # Example
///
/// ```toml
/// # Skip words that are pure punctuation instead of indexing them
/// # under the empty token.
/// drop_empty_tokens = false
///
/// match_prefix = "Found in file: "
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Skip fields that normalize to the empty token during ingestion.
    /// A skipped field consumes no position.
    #[serde(default)]
    pub drop_empty_tokens: bool,
    /// Text placed before the document name in every match record.
    #[serde(default = "default_match_prefix")]
    pub match_prefix: String,
}

fn default_match_prefix() -> String {
    DEFAULT_MATCH_PREFIX.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            drop_empty_tokens: false,
            match_prefix: default_match_prefix(),
        }
    }
}

impl SearchConfig {
    /// Format the match record for a document name.
    pub fn format_match(&self, name: &str) -> String {
        format!("{}{}", self.match_prefix, name)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Sift search engine configuration
#
# Words made only of punctuation (e.g. "--" or "...") normalize to the
# empty token. By default they are indexed under that empty key and take
# a position like any other word. Set to true to skip them entirely.
drop_empty_tokens = false

# Prefix of each search result record.
match_prefix = "Found in file: "
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::InvalidConfig(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_keeps_empty_tokens() {
        let config = SearchConfig::default();
        assert!(!config.drop_empty_tokens);
        assert_eq!(config.match_prefix, "Found in file: ");
    }

    #[test]
    fn format_match_uses_prefix() {
        let config = SearchConfig::default();
        assert_eq!(config.format_match("doc1"), "Found in file: doc1");

        let config = SearchConfig {
            match_prefix: "hit: ".to_string(),
            ..SearchConfig::default()
        };
        assert_eq!(config.format_match("a.txt"), "hit: a.txt");
    }

    #[test]
    fn default_toml_parses_to_default() {
        let config: SearchConfig = toml::from_str(SearchConfig::default_toml()).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn parse_drop_empty_tokens() {
        let config: SearchConfig = toml::from_str("drop_empty_tokens = true").unwrap();
        assert!(config.drop_empty_tokens);
        assert_eq!(config.match_prefix, DEFAULT_MATCH_PREFIX);
    }

    #[test]
    fn parse_wrong_type_is_rejected() {
        let parsed: std::result::Result<SearchConfig, _> =
            toml::from_str("drop_empty_tokens = \"yes\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn write_default_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(!path.exists());

        SearchConfig::write_default_if_missing(&path).unwrap();
        assert!(path.exists());

        let config = SearchConfig::from_file(&path).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn write_default_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "drop_empty_tokens = true\n").unwrap();

        SearchConfig::write_default_if_missing(&path).unwrap();

        let config = SearchConfig::from_file(&path).unwrap();
        assert!(config.drop_empty_tokens);
    }

    #[test]
    fn from_file_empty_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "").unwrap();

        let config = SearchConfig::from_file(&path).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn from_file_missing_is_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let err = SearchConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn from_file_garbage_is_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "this is = = not toml").unwrap();

        let err = SearchConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn write_to_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = SearchConfig {
            drop_empty_tokens: true,
            match_prefix: "match: ".to_string(),
        };

        config.write_to_file(&path).unwrap();
        let loaded = SearchConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
