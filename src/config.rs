//! Configuration handling for the lead capture client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Simulated round-trip when nothing is configured
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

/// User configuration, read from `config.json` in the platform config dir
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeadsConfig {
    /// Simulated transport delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Fail submissions that take longer than this many milliseconds
    pub submit_timeout_ms: Option<u64>,
    /// Make the simulated transport reject every lead
    pub simulate_failure: Option<bool>,
    /// Go straight to the form
    pub skip_splash: Option<bool>,
    /// Write logs here instead of stderr
    pub log_file: Option<PathBuf>,
}

impl LeadsConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "powergridbess", "powergrid-leads")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where logs go: `log_file` if set, else the platform data dir
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_local_dir().join("powergrid-leads.log"))
        })
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: LeadsConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout_ms.map(Duration::from_millis)
    }

    pub fn simulate_failure(&self) -> bool {
        self.simulate_failure.unwrap_or(false)
    }

    pub fn skip_splash(&self) -> bool {
        self.skip_splash.unwrap_or(false)
    }
}
