//! Optional TOML configuration.
//!
//! Looked up at `<config dir>/keycalc/config.toml` unless a path is given on
//! the command line. Every key is optional.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// User-facing settings for the read-print loop.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Printed before every input line.
    pub prompt: String,
    /// A line equal to this ends the session.
    pub quit: String,
    /// Print commands and memory snapshots after every line.
    pub debug: bool,
    /// Print the greeting on startup.
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            quit: "q".to_string(),
            debug: false,
            banner: true,
        }
    }
}

impl Config {
    /// Default location of the configuration file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present and defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    tracing::debug!("no configuration file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.quit.is_empty() {
            anyhow::bail!("quit sentinel must not be empty");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml("quit = \"exit\"\ndebug = true\n").unwrap();
        assert_eq!(config.quit, "exit");
        assert!(config.debug);
        assert_eq!(config.prompt, "> ");
        assert!(config.banner);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml("colour = \"red\"").is_err());
    }

    #[test]
    fn test_empty_quit_rejected() {
        let err = Config::from_toml("quit = \"\"").unwrap_err();
        assert!(err.to_string().contains("quit sentinel"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(Config::from_toml("debug = \"yes\"").is_err());
    }

    #[test]
    fn test_missing_explicit_path() {
        let path = std::env::temp_dir().join("keycalc-missing-config.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_explicit_path() {
        let name = format!("keycalc-config-{}.toml", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, "prompt = \"calc> \"\nbanner = false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.prompt, "calc> ");
        assert!(!config.banner);
    }
}
