//! Configuration handling for the listing editor

use crate::state::{CardStyle, DisplayMode, PreviewProjector};
use crate::submission::DEFAULT_LATENCY;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// User configuration for the editor
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StudioConfig {
    /// Currency symbol used on the preview card
    pub currency_symbol: Option<String>,
    /// Simulated submission latency in milliseconds
    pub submit_latency_ms: Option<u64>,
    /// Display mode on startup
    pub default_mode: Option<DisplayMode>,
    /// Card style on startup
    pub default_style: Option<CardStyle>,
}

impl StudioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "listing-studio", "listing-studio")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: StudioConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn submit_latency(&self) -> Duration {
        self.submit_latency_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LATENCY)
    }

    pub fn projector(&self) -> PreviewProjector {
        match &self.currency_symbol {
            Some(symbol) => PreviewProjector::new(symbol.clone()),
            None => PreviewProjector::default(),
        }
    }
}
