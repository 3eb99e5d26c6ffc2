use crate::api::DEFAULT_BASE_URL;
use crate::app::view_state::DEFAULT_WINDOW_DAYS;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_window_days")]
    pub default_window_days: u32,
    #[serde(default = "default_range_presets")]
    pub range_presets: Vec<u32>,
    /// Where PNG exports go. Falls back to ~/Downloads, then home.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_range_presets() -> Vec<u32> {
    vec![7, 30, 90, 180, 365]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_window_days: default_window_days(),
            range_presets: default_range_presets(),
            export_dir: None,
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("stockdash");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir.join("config.json"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, writing defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content)?;
        config.normalize();
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Keep presets positive, sorted, unique, and containing the default window.
    pub fn normalize(&mut self) {
        if self.default_window_days == 0 {
            self.default_window_days = DEFAULT_WINDOW_DAYS;
        }
        self.range_presets.retain(|&d| d > 0);
        if self.range_presets.is_empty() {
            self.range_presets = default_range_presets();
        }
        if !self.range_presets.contains(&self.default_window_days) {
            self.range_presets.push(self.default_window_days);
        }
        self.range_presets.sort_unstable();
        self.range_presets.dedup();
    }
}
