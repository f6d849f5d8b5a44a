//! Configuration management for fsift.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Main configuration structure for fsift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base patterns, evaluated ahead of any patterns given on the command line.
    pub patterns: Vec<String>,

    /// Directory walk settings.
    pub traversal: TraversalConfig,
}

/// Directory-walk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Skip subdirectories that cannot be read instead of failing the walk.
    pub skip_unreadable: bool,

    /// Descend into symlinked directories.
    pub follow_links: bool,

    /// Report paths relative to the walk root instead of root-joined.
    pub relative_paths: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            skip_unreadable: true,
            follow_links: false,
            relative_paths: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;

        debug!(
            "Loaded config from {} ({} base patterns)",
            path.display(),
            config.patterns.len()
        );
        Ok(config)
    }

    /// Load configuration if the file exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.patterns.is_empty());
        assert!(config.traversal.skip_unreadable);
        assert!(!config.traversal.follow_links);
        assert!(!config.traversal.relative_paths);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "patterns = [\"*.tmp\", \"!keep.tmp\"]\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.patterns, vec!["*.tmp", "!keep.tmp"]);
        assert_eq!(config.traversal, TraversalConfig::default());
    }

    #[test]
    fn test_traversal_section() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[traversal]\nskip_unreadable = false\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.traversal.skip_unreadable);
        assert!(!config.traversal.follow_links);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "patterns = \"not a list\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_or_default(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"patterns = ["build/*"]

[traversal]
skip_unreadable = false
follow_links = true
relative_paths = true
"#,
        )
        .unwrap();

        let expected = Config {
            patterns: vec!["build/*".to_string()],
            traversal: TraversalConfig {
                skip_unreadable: false,
                follow_links: true,
                relative_paths: true,
            },
        };

        assert_eq!(Config::load(&path).unwrap(), expected);
    }
}
