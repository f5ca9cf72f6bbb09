use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings from config.toml in the data directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Use "[x]" / "[ ]" checkboxes instead of ballot-box glyphs
    #[serde(default)]
    pub ascii: bool,
    #[serde(default = "default_true")]
    pub show_keybindings: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            ascii: false,
            show_keybindings: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load config from a TOML file; a missing file yields the defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = tempdir().unwrap();
        let config = load_config(temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.ui.show_keybindings);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nascii = true\n").unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.ui.ascii);
        assert!(config.ui.show_keybindings);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[ui]\nascii = false\nshow_keybindings = false\n\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert!(!config.ui.show_keybindings);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[ui\nascii = ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}
