use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub keyboard: KeyboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub data_dir: Option<String>,
    #[serde(default = "default_placeholder_interval")]
    pub placeholder_interval_ms: u64,
    #[serde(default = "default_persist")]
    pub persist: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    "void_light".to_string()
}

fn default_placeholder_interval() -> u64 {
    3000
}

fn default_persist() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            data_dir: None,
            placeholder_interval_ms: default_placeholder_interval(),
            persist: default_persist(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Command used to hand the export URI to the OS. Platform default when unset.
    #[serde(default)]
    pub opener: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardConfig {
    #[serde(default = "default_export")]
    pub export: String,
    #[serde(default = "default_quit")]
    pub quit: String,
    #[serde(default = "default_cycle_theme")]
    pub cycle_theme: String,
}

fn default_export() -> String { "ctrl+e".to_string() }
fn default_quit() -> String { "ctrl+q".to_string() }
fn default_cycle_theme() -> String { "ctrl+t".to_string() }

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            export: default_export(),
            quit: default_quit(),
            cycle_theme: default_cycle_theme(),
        }
    }
}
