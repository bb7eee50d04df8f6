//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// ShotAPI key.
    pub api_key: Option<String>,

    /// Service endpoint override.
    pub base_url: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Directory for saved captures (`~` is expanded).
    pub output_dir: Option<String>,

    /// Default concurrency ceiling for `batch`.
    pub max_concurrent: Option<usize>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "shotapi", "shotapi")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Update a single key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_key" => self.api_key = Some(value.to_string()),
            "base_url" => self.base_url = Some(value.trim_end_matches('/').to_string()),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            "output_dir" => self.output_dir = Some(value.to_string()),
            "max_concurrent" => {
                let max: usize = value.parse()?;
                anyhow::ensure!(max > 0, "max_concurrent must be at least 1");
                self.max_concurrent = Some(max);
            }
            _ => anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 api_key          - Your ShotAPI key\n  \
                 base_url         - Service endpoint\n  \
                 output_format    - pretty, json, csv or yaml\n  \
                 output_dir       - Where captures are saved\n  \
                 max_concurrent   - Default batch concurrency",
                key
            ),
        }
        Ok(())
    }

    /// Output directory with `~` and environment variables expanded.
    pub fn expanded_output_dir(&self) -> Result<Option<PathBuf>> {
        self.output_dir
            .as_deref()
            .map(|dir| expand_path(Path::new(dir)))
            .transpose()
    }
}

/// Expand `~` and environment variables in a user-supplied path.
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let expanded = shellexpand::full(&path.to_string_lossy())?.into_owned();
    Ok(PathBuf::from(expanded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(config.output_format.is_none());
        assert!(config.expanded_output_dir().unwrap().is_none());
    }

    #[test]
    fn test_set_keys() {
        let mut config = Config::default();
        config.set("api_key", "abc").unwrap();
        config.set("output", "json").unwrap();
        config.set("base_url", "http://localhost:3000/").unwrap();
        config.set("max_concurrent", "8").unwrap();

        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.max_concurrent, Some(8));

        assert!(config.set("max_concurrent", "0").is_err());
        assert!(config.set("colour", "blue").is_err());
    }

    #[test]
    fn test_expand_path() {
        let plain = expand_path(Path::new("shots/out.png")).unwrap();
        assert_eq!(plain, PathBuf::from("shots/out.png"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.set("api_key", "abc").unwrap();
        config.set("output_dir", "/tmp/shots").unwrap();

        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
        assert_eq!(
            config.expanded_output_dir().unwrap(),
            Some(PathBuf::from("/tmp/shots"))
        );
    }
}
