//! Configuration management for solar-track
//!
//! Config stored at: ~/.config/solar-track/config.json

use serde::{Deserialize, Serialize};
use solar_ai::AnalyzerConfig;
use solar_types::{ConfigError, OutputFormat, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "solar-track";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Data directory override (holds records.json)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Unit catalog override file (.toml or .csv)
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Gemini model name
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Number of most recent records sent for analysis
    #[serde(default = "default_analysis_window")]
    pub analysis_window: usize,

    /// Language of the AI summary
    #[serde(default = "default_analysis_language")]
    pub analysis_language: String,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_analysis_window() -> usize {
    10
}

fn default_analysis_language() -> String {
    "Bahasa Indonesia".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            catalog_path: None,
            gemini_model: default_gemini_model(),
            api_key_env: default_api_key_env(),
            analysis_window: default_analysis_window(),
            analysis_language: default_analysis_language(),
            output_format: OutputFormat::default(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory holding the fuel log snapshot
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(data_dir)
    }

    /// API key from the configured environment variable, if set and non-blank
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::default()
            .with_model(self.gemini_model.clone())
            .with_window(self.analysis_window)
            .with_timeout_secs(self.request_timeout_secs)
            .with_language(self.analysis_language.clone())
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SolarTrack Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Data dir:        {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(
            f,
            "Unit catalog:    {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(f, "Gemini model:    {}", self.gemini_model)?;
        writeln!(
            f,
            "API key env:     {} ({})",
            self.api_key_env,
            if self.api_key().is_some() { "set" } else { "not set" }
        )?;
        writeln!(f, "Analysis window: {} records", self.analysis_window)?;
        writeln!(f, "Summary lang:    {}", self.analysis_language)?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(f, "Timeout:         {} s", self.request_timeout_secs)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}
