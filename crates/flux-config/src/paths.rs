//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/flux-tutorial/`, `~/.cache/flux-tutorial/`
//! - macOS: `~/Library/Application Support/flux-tutorial/`, `~/Library/Caches/flux-tutorial/`
//! - Windows: `%APPDATA%\flux-tutorial\`, `%LOCALAPPDATA%\flux-tutorial\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "flux-tutorial";

/// Location of the application config directory, without creating it
pub fn app_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let dir = app_config_dir().context("Could not determine config directory")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
///
/// Log files go here in release builds.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_dir_is_named_after_the_app() {
        if let Some(dir) = app_config_dir() {
            assert!(dir.ends_with(APP_NAME));
        }
    }
}
