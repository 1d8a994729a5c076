//! Logging using simplelog
//!
//! Logs go to stderr unless `log_to_file` is set. The log file location
//! depends on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/flux-tutorial/ on Linux)

use anyhow::{Context, Result};
use flux_config::TutorialConfig;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Log target of the reducer call lines
const REDUCER_TARGET: &str = "flux_store::reducer";

/// Get the log file path based on build type
fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("flux-tutorial-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        flux_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Level from `RUST_LOG` if set, else from the config file
///
/// Without `RUST_LOG`, tracing reducers raises the configured level to
/// `debug` so the reducer call lines show up.
fn level_filter(env: Option<&str>, configured: &str, trace_reducers: bool) -> LevelFilter {
    let parse = |value: &str| match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    };

    if let Some(level) = env.and_then(parse) {
        return level;
    }
    let level = parse(configured).unwrap_or(LevelFilter::Info);
    if trace_reducers && level != LevelFilter::Off {
        level.max(LevelFilter::Debug)
    } else {
        level
    }
}

/// Initialize logging
///
/// Returns the path of the log file when logging to a file.
pub fn init(config: &TutorialConfig) -> Result<Option<PathBuf>> {
    let env = std::env::var("RUST_LOG").ok();
    let level = level_filter(env.as_deref(), &config.log_level, config.trace_reducers);

    let mut builder = ConfigBuilder::new();
    builder
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c); // Fallback if local time offset fails
    if !config.trace_reducers {
        builder.add_filter_ignore_str(REDUCER_TARGET);
    }
    let log_config = builder.build();

    if config.log_to_file {
        let log_file = log_file_path();
        let file = File::create(&log_file)
            .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
        WriteLogger::init(level, log_config, file).context("Failed to initialize logger")?;
        Ok(Some(log_file))
    } else {
        TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto)
            .context("Failed to initialize logger")?;
        Ok(None)
    }
}
