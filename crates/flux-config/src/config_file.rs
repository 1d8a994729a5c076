use std::path::PathBuf;

pub const CONFIG_FILE: &str = ".flux-tutorial.toml";

/// A config file found on disk
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub content: String,
}

/// Load config file content from CWD first, then home directory
///
/// Searches for:
/// 1. .flux-tutorial.toml in the current working directory
/// 2. .flux-tutorial.toml in the home directory
/// 3. config.toml in the application config directory
///
/// Nothing is created while searching. Returns the first file found.
pub fn load_config_file() -> Option<ConfigFile> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE));
    }
    if let Some(dir) = crate::paths::app_config_dir() {
        candidates.push(dir.join("config.toml"));
    }
    read_first(&candidates)
}

/// The first readable file among `candidates`
fn read_first(candidates: &[PathBuf]) -> Option<ConfigFile> {
    candidates.iter().find_map(|path| {
        let content = std::fs::read_to_string(path).ok()?;
        Some(ConfigFile {
            path: path.clone(),
            content,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_yield_none() {
        let candidates = vec![PathBuf::from("/nonexistent/flux/.flux-tutorial.toml")];
        assert_eq!(read_first(&candidates), None);
    }
}
