//! Tutorial configuration
//!
//! Configuration loaded from .flux-tutorial.toml file.

use crate::config_file::ConfigFile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tutorial configuration loaded from .flux-tutorial.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TutorialConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` wins when set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Write the log to a timestamped file instead of stderr
    #[serde(default)]
    pub log_to_file: bool,

    /// Log every reducer call with its state and action
    #[serde(default = "default_trace_reducers")]
    pub trace_reducers: bool,

    /// JSON file replacing the built-in blog post of the normalization part
    #[serde(default)]
    pub blog_post: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_trace_reducers() -> bool {
    true
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_to_file: false,
            trace_reducers: default_trace_reducers(),
            blog_post: None,
        }
    }
}

/// Outcome of [`TutorialConfig::load`]
///
/// Loading happens before logging is set up, so the outcome is kept and
/// logged later through [`LoadedConfig::report`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: TutorialConfig,
    /// File the config was read from
    pub source: Option<PathBuf>,
    /// Why the file was ignored in favour of defaults
    pub error: Option<String>,
}

impl LoadedConfig {
    /// Log where the config came from
    pub fn report(&self) {
        match (&self.source, &self.error) {
            (Some(path), None) => log::info!("Loaded tutorial config from {}", path.display()),
            (Some(path), Some(err)) => log::warn!(
                "Failed to parse config file {}: {}, using defaults",
                path.display(),
                err
            ),
            (None, _) => log::debug!("Using default tutorial config"),
        }
    }
}

impl TutorialConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> LoadedConfig {
        match crate::load_config_file() {
            Some(file) => Self::from_file(file),
            None => LoadedConfig {
                config: Self::default(),
                source: None,
                error: None,
            },
        }
    }

    /// Config from a file found on disk, falling back to defaults on error
    pub fn from_file(file: ConfigFile) -> LoadedConfig {
        match Self::parse(&file.content) {
            Ok(config) => LoadedConfig {
                config,
                source: Some(file.path),
                error: None,
            },
            Err(e) => LoadedConfig {
                config: Self::default(),
                source: Some(file.path),
                error: Some(e.to_string()),
            },
        }
    }

    /// Parse config file content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
