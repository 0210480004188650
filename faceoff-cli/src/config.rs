/// Config file loading and creation for the faceoff CLI.
///
/// Config lives at ~/.config/faceoff/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct FaceoffConfig {
    pub json: Option<bool>,
    pub max_attempts: Option<usize>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# faceoff configuration
# All values here can be overridden by CLI flags.

# Output results as JSON instead of a table
# json = false

# Give up after this many invalid answers to a single matchup
# max_attempts = 10
";

/// Returns the default config path: ~/.config/faceoff/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("faceoff").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> FaceoffConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => FaceoffConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    // Create parent directories
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}
