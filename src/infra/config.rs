// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::charts::{LineChartLayout, PieLayout};
use crate::infra::errors::PortalError;
use crate::infra::paths;
use crate::portal::navigation::Page;
use crate::portal::theme::ThemeMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub portal: PortalConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub charts: ChartsConfig,

    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Page shown when the portal opens. Unknown keys fall back to home.
    pub start_page: String,
    pub theme: ThemeMode,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            start_page: Page::Home.key().to_string(),
            theme: ThemeMode::Light,
        }
    }
}

impl PortalConfig {
    pub fn start_page(&self) -> Page {
        Page::from_key(&self.start_page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub reply_delay_ms: u64,
    pub greeting: String,
    pub suggestions: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 2000,
            greeting: "Hello! I'm your MOSDAC AI assistant. I can help you find satellite data, \
                       explore missions, and navigate our knowledge base. What would you like to know?"
                .into(),
            suggestions: vec![
                "Show me recent satellite missions".into(),
                "Find data for Mumbai, India".into(),
                "Browse documentation for Cartosat-3".into(),
            ],
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.reply_delay_ms)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartsConfig {
    #[serde(default)]
    pub line: LineChartLayout,
    #[serde(default)]
    pub pie: PieLayout,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// TOML dataset replacing the built-in mock data.
    pub dataset: Option<String>,
}

impl DataConfig {
    /// The configured dataset, else `dataset.toml` in the data dir if present.
    pub fn dataset_path(&self) -> Option<PathBuf> {
        if let Some(ref p) = self.dataset {
            return Some(PathBuf::from(p));
        }
        let default = paths::dataset_file_path();
        default.exists().then_some(default)
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject settings no chart or chat could work with.
    pub fn validate(&self) -> Result<(), PortalError> {
        self.charts
            .line
            .validate()
            .map_err(|e| PortalError::Config(format!("[charts.line] {e}")))?;
        let pie = &self.charts.pie;
        if !(pie.radius > 0.0 && pie.hover_delta >= 0.0) {
            return Err(PortalError::Config(format!(
                "[charts.pie] radius {} / hover_delta {} out of range",
                pie.radius, pie.hover_delta
            )));
        }
        if self.chat.suggestions.iter().any(|s| s.trim().is_empty()) {
            return Err(PortalError::Config(
                "[chat] suggestions must not be blank".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert_eq!(c.chat.reply_delay_ms, 2000);
        assert_eq!(c.chat.suggestions.len(), 3);
        assert_eq!(c.portal.start_page(), Page::Home);
        assert_eq!(c.portal.theme, ThemeMode::Light);
        assert!(c.data.dataset.is_none());
    }

    #[test]
    fn test_chart_defaults() {
        let c = ChartsConfig::default();
        assert!((c.line.width - 600.0).abs() < f64::EPSILON);
        assert!((c.line.height - 300.0).abs() < f64::EPSILON);
        assert!((c.line.padding - 40.0).abs() < f64::EPSILON);
        assert!((c.line.scale_max - 1000.0).abs() < f64::EPSILON);
        assert_eq!(c.line.ticks, vec![0.0, 200.0, 400.0, 600.0, 800.0]);
        assert!((c.pie.radius - 50.0).abs() < f64::EPSILON);
        assert!((c.pie.hover_delta - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.chat.reply_delay_ms, 2000);
        assert!((config.charts.line.scale_max - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_partial_sections() {
        let toml_str = r#"
[portal]
theme = "dark"
start_page = "datavisualization"

[chat]
reply_delay_ms = 250

[charts.line]
scale_max = 2000.0
ticks = [0.0, 500.0, 1000.0]

[charts.pie]
hover_delta = 8.0

[data]
dataset = "/tmp/portal.toml"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.portal.theme, ThemeMode::Dark);
        assert_eq!(config.portal.start_page(), Page::DataVisualization);
        assert_eq!(config.chat.reply_delay_ms, 250);
        // untouched fields keep their defaults
        assert_eq!(config.chat.suggestions.len(), 3);
        assert!((config.charts.line.width - 600.0).abs() < f64::EPSILON);
        assert!((config.charts.line.scale_max - 2000.0).abs() < f64::EPSILON);
        assert_eq!(config.charts.line.ticks.len(), 3);
        assert!((config.charts.pie.radius - 50.0).abs() < f64::EPSILON);
        assert!((config.charts.pie.hover_delta - 8.0).abs() < f64::EPSILON);
        assert_eq!(
            config.data.dataset_path(),
            Some(PathBuf::from("/tmp/portal.toml"))
        );
    }

    #[test]
    fn test_load_rejects_bad_layout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[charts.line]\nscale_max = 0.0\n").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("[charts.line]"));
    }

    #[test]
    fn test_unknown_start_page_falls_back_home() {
        let config: Config = toml::from_str("[portal]\nstart_page = \"weather\"\n").unwrap();
        assert_eq!(config.portal.start_page(), Page::Home);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chat]\nreply_delay_ms = 10").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.chat.reply_delay(), std::time::Duration::from_millis(10));
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chat\nreply_delay_ms = ").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
