use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Pretty-print the JSON manifest (2-space indentation)
    #[serde(default = "default_true")]
    pub pretty_output: bool,

    /// Also write one plain-text file per episode next to the manifest
    #[serde(default)]
    pub write_episode_files: bool,

    /// Extension appended to the input stem for the manifest file
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Maximum number of scripts processed concurrently in folder mode
    #[serde(default = "default_concurrent_files")]
    pub concurrent_files: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty_output: true,
            write_episode_files: false,
            output_extension: default_output_extension(),
            concurrent_files: default_concurrent_files(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output_extension.trim().is_empty() {
            return Err(anyhow!("Output extension must not be empty"));
        }

        if self.output_extension.starts_with('.') {
            return Err(anyhow!(
                "Output extension must not start with a dot: {}",
                self.output_extension
            ));
        }

        if self.concurrent_files == 0 {
            return Err(anyhow!("Concurrent file count must be at least 1"));
        }

        Ok(())
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_true() -> bool {
    true
}

fn default_output_extension() -> String {
    "episodes.json".to_string()
}

fn default_concurrent_files() -> usize {
    4
}
