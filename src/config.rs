//! Configuration loader for relocation defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde::Deserialize;
use tracing::debug;

use crate::models::ResolvedUrl;

/// File name searched for when no explicit configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "href-rebase.config.json";

/// Discoverable configuration describing the bases to relocate between.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelocationConfig {
    /// Base URL the hrefs were originally written against.
    pub old_base: Option<String>,
    /// Base URL the hrefs will be resolved against after relocation.
    pub new_base: Option<String>,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: Option<String>,
}

/// Errors that can occur while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to parse the JSON configuration file.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
}

impl RelocationConfig {
    /// Load `href-rebase.config.json` from `dir`, falling back to defaults when it does not exist.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        match Self::from_path(&candidate) {
            Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!(path = %candidate.display(), "no configuration file found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Replace configured bases with explicitly supplied ones.
    pub fn with_overrides(mut self, old_base: Option<String>, new_base: Option<String>) -> Self {
        if old_base.is_some() {
            self.old_base = old_base;
        }
        if new_base.is_some() {
            self.new_base = new_base;
        }
        self
    }

    /// Both bases, or an error naming the one that is missing.
    pub fn bases(&self) -> Result<(ResolvedUrl, ResolvedUrl)> {
        let old_base = non_empty(self.old_base.as_deref()).ok_or_else(|| {
            anyhow!(
                "missing old base URL (pass --old-base or set `old_base` in {DEFAULT_CONFIG_FILE})"
            )
        })?;
        let new_base = non_empty(self.new_base.as_deref()).ok_or_else(|| {
            anyhow!(
                "missing new base URL (pass --new-base or set `new_base` in {DEFAULT_CONFIG_FILE})"
            )
        })?;
        Ok((ResolvedUrl::from(old_base), ResolvedUrl::from(new_base)))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_returns_default_for_missing_file() {
        let temp = tempdir().expect("failed to create temp dir");
        let config = RelocationConfig::discover(temp.path())
            .expect("missing files should not produce an error");
        assert_eq!(config, RelocationConfig::default());
    }

    #[test]
    fn discover_reads_configuration() {
        let temp = tempdir().expect("failed to create temp dir");
        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{"old_base": "/src/index.html", "new_base": "/dist/index.html"}"#,
        )
        .expect("failed to write config file");

        let config = RelocationConfig::discover(temp.path()).expect("configuration should load");
        assert_eq!(config.old_base.as_deref(), Some("/src/index.html"));
        assert_eq!(config.new_base.as_deref(), Some("/dist/index.html"));
        assert_eq!(config.log_filter, None);
    }

    #[test]
    fn discover_reports_invalid_json() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "{ not json").expect("failed to write config file");

        let err = RelocationConfig::discover(temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let temp = tempdir().expect("failed to create temp dir");
        let err = RelocationConfig::from_path(&temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = RelocationConfig {
            old_base: Some("/a/index.html".into()),
            new_base: Some("/b/index.html".into()),
            log_filter: None,
        }
        .with_overrides(None, Some("/c/index.html".into()));

        let (old_base, new_base) = config.bases().unwrap();
        assert_eq!(old_base.as_str(), "/a/index.html");
        assert_eq!(new_base.as_str(), "/c/index.html");
    }

    #[test]
    fn missing_bases_are_reported() {
        let err = RelocationConfig::default().bases().unwrap_err();
        assert!(err.to_string().contains("old base"));

        let err = RelocationConfig::default()
            .with_overrides(Some("/a/".into()), Some("  ".into()))
            .bases()
            .unwrap_err();
        assert!(err.to_string().contains("new base"));
    }
}
