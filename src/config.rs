// Session configuration
//
// Priority, highest first: CLI flags, YAML file, defaults. The file lives at
// `--config <path>` or `$XDG_CONFIG_HOME/tasklist/config.yml`.

use crate::filter::FilterMode;
use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const APP_DIR: &str = "tasklist";
const CONFIG_FILE: &str = "config.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the list opened at startup
    pub list_name: String,
    pub default_filter: FilterMode,
    pub color: bool,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_name: "Today".to_string(),
            default_filter: FilterMode::All,
            color: true,
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from an explicit path; the file must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context(format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content).context(format!("Invalid config file {}", path.display()))?;

        info!(path = ?path, "Loaded config");
        Ok(config)
    }

    /// Load from `path` if given, else the default location if it exists, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(_) => Ok(Self::default()),
            None => {
                warn!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(content).context("Failed to parse YAML")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.list_name.trim().is_empty() {
            return Err(eyre!("list_name cannot be empty or whitespace-only"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.list_name, "Today");
        assert_eq!(config.default_filter, FilterMode::All);
        assert!(config.color);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse("list_name: Groceries\ndefault_filter: active\n").unwrap();
        assert_eq!(config.list_name, "Groceries");
        assert_eq!(config.default_filter, FilterMode::Active);
        // Unset fields fall back to defaults
        assert!(config.color);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::parse("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Config::parse("default_filter: someday\n").is_err());
        assert!(Config::parse("list_name: \"  \"\n").is_err());
        assert!(Config::parse("color: [not, a, bool]\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "list_name: Work\ncolor: false\nprompt: \"tasks> \"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.list_name, "Work");
        assert!(!config.color);
        assert_eq!(config.prompt, "tasks> ");
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_serialization() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("list_name: Today"));
        assert!(yaml.contains("default_filter: all"));
    }
}
