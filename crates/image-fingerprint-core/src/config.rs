use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::processing::{TAG_SPACE_MAX, TAG_SPACE_MIN};

/// How two 64-bit hashes are scored against each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimilarityMode {
    /// Stops counting once the score falls below one half
    Approximate,

    /// Full Hamming comparison over all 64 bits
    Exact,
}

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Configuration for fingerprinting and comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid resolution used when sampling tag sequences (8-128)
    pub tag_space: usize,

    /// Scoring strategy for hash similarity
    pub similarity_mode: SimilarityMode,

    /// Hash similarity at or above which two images count as similar (0.0-1.0)
    pub similarity_threshold: f32,

    /// Decimal places kept in reported scores (2, 4, 6 or 8)
    pub precision: i64,

    /// Log level
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag_space: 16,
            similarity_mode: SimilarityMode::Approximate,
            similarity_threshold: 0.9,
            precision: 4,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: Config = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(TAG_SPACE_MIN..=TAG_SPACE_MAX).contains(&self.tag_space) {
            return Err(Error::Configuration(format!(
                "Tag space must be between {} and {}",
                TAG_SPACE_MIN, TAG_SPACE_MAX
            )));
        }

        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::Configuration(
                "Similarity threshold must be between 0.0 and 1.0".to_string(),
            ));
        }

        if !(2..=8).contains(&self.precision) {
            return Err(Error::Configuration(
                "Precision must be between 2 and 8 decimal places".to_string(),
            ));
        }

        Ok(())
    }
}
