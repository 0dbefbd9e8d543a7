use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::Config;

const APP_DIR: &str = "void";
const CONFIG_FILE: &str = "config.toml";

/// `~/.config/void` on Unix, the platform config directory elsewhere.
pub fn config_dir() -> PathBuf {
    let xdg = dirs::home_dir().map(|home| home.join(".config").join(APP_DIR));
    match xdg {
        Some(dir) if cfg!(unix) || dir.exists() => dir,
        _ => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR),
    }
}

pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
    Ok(dir)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path())
}

pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(config, &config_path())
}

/// Read the config at `path`. A missing file is written out with defaults
/// first, so the user has something to edit.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        let config = Config::default();
        save_config_to(&config, path)?;
        info!("event=config_created path={}", path.display());
        return Ok(config);
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read config: {:?}", path))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {:?}", path))?;

    if config.general.placeholder_interval_ms == 0 {
        warn!("event=config_interval_zero path={} fallback=default", path.display());
    }
    Ok(config)
}

pub fn save_config_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, content).with_context(|| format!("Failed to write config: {:?}", path))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    let home_relative = match path {
        "~" => Some(""),
        _ => path.strip_prefix("~/"),
    };
    match (home_relative, dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Directory the draft file lives in: `general.data_dir`, else the config dir.
pub fn resolve_data_dir(data_dir: Option<&str>) -> PathBuf {
    data_dir.map(expand_tilde).unwrap_or_else(config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_under_app_dir() {
        let path = config_path();
        if cfg!(unix) {
            assert!(path.to_string_lossy().contains(".config/void"));
        }
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_missing_config_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.general.theme, "void_light");
        assert_eq!(config.general.placeholder_interval_ms, 3000);
        assert!(config.general.persist);

        let written = fs::read_to_string(&path).unwrap();
        let reparsed: Config = toml::from_str(&written).unwrap();
        assert_eq!(reparsed.keyboard.export, "ctrl+e");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\ntheme = \"void_dark\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general.theme, "void_dark");
        assert_eq!(config.general.placeholder_interval_ms, 3000);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.keyboard.quit, "ctrl+q");
        assert!(config.export.opener.is_none());
    }

    #[test]
    fn test_malformed_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\ntheme = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to parse config"));
        assert!(message.contains("config.toml"));
        // The broken file is left alone for the user to fix.
        assert_eq!(fs::read_to_string(&path).unwrap(), "[general\ntheme = ");
    }

    #[test]
    fn test_save_then_load_keeps_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.general.persist = false;
        config.export.opener = Some("xdg-open".to_string());

        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert!(!loaded.general.persist);
        assert_eq!(loaded.export.opener.as_deref(), Some("xdg-open"));
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/notes/void"), home.join("notes/void"));
            assert_eq!(expand_tilde("~"), home);
        }
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }

    #[test]
    fn test_resolve_data_dir() {
        assert_eq!(resolve_data_dir(Some("/tmp/void-test")), PathBuf::from("/tmp/void-test"));
        assert_eq!(resolve_data_dir(None), config_dir());
    }
}
