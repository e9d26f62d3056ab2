// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::{
    DEFAULT_BATCH_COUNT, DEFAULT_PASSWORD_LENGTH, MAX_BATCH_COUNT, MAX_PASSWORD_LENGTH,
    MIN_BATCH_COUNT, MIN_PASSWORD_LENGTH,
};

// Configuration for the password tool
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_batch_count: usize,

    // Export
    pub export_directory: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: DEFAULT_PASSWORD_LENGTH,
            default_batch_count: DEFAULT_BATCH_COUNT,

            // Export
            export_directory: PathBuf::from("."),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unknown or malformed values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(length) => {
                    config.default_password_length =
                        length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
                }
                Err(_) => log::warn!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("DEFAULT_BATCH_COUNT") {
            match val.trim().parse::<usize>() {
                Ok(count) => {
                    config.default_batch_count = count.clamp(MIN_BATCH_COUNT, MAX_BATCH_COUNT);
                }
                Err(_) => log::warn!("Ignoring invalid DEFAULT_BATCH_COUNT '{}'", val),
            }
        }

        // Export
        if let Some(dir) = lookup("EXPORT_DIRECTORY") {
            if !dir.trim().is_empty() {
                config.export_directory = PathBuf::from(dir);
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }
}
