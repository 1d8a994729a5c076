//! Configuration and file locations for the flux tutorial
//!
//! This crate provides:
//! - File path utilities for config and cache directories
//! - Configuration file loading (TOML)
//! - Tutorial configuration (TutorialConfig)

pub mod config_file;
pub mod paths;
pub mod tutorial_config;

pub use config_file::{load_config_file, ConfigFile};
pub use paths::{app_config_dir, cache_dir, config_dir};
pub use tutorial_config::{LoadedConfig, TutorialConfig};
