use crate::utils::error::{AppError, AppResult};
use ratatui::symbols::Marker;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub marker: ChartMarker,
}

/// Language used for prompts, messages and category labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-tw")]
    ZhTw,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMarker {
    #[default]
    Braille,
    Dot,
    Block,
}

impl ChartMarker {
    pub fn symbol(self) -> Marker {
        match self {
            ChartMarker::Braille => Marker::Braille,
            ChartMarker::Dot => Marker::Dot,
            ChartMarker::Block => Marker::Block,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: true,
            locale: Locale::En,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            marker: ChartMarker::Braille,
        }
    }
}

impl Config {
    /// Read the config file, falling back to defaults when it does not exist
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(config_path)?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        tracing::debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("selfscope")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_custom(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(!dir.path().join("absent.toml").exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.general.locale = Locale::ZhTw;
        config.chart.marker = ChartMarker::Block;
        config.save_to(&path).unwrap();

        let loaded = Config::load_custom(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general]\nlocale = \"zh-tw\"\n").unwrap();

        let config = Config::load_custom(&path).unwrap();
        assert_eq!(config.general.locale, Locale::ZhTw);
        assert!(config.general.color);
        assert!(config.chart.enabled);
        assert_eq!(config.chart.marker, ChartMarker::Braille);
    }

    #[test]
    fn test_unknown_marker_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chart]\nmarker = \"sparkles\"\n").unwrap();

        let err = Config::load_custom(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
