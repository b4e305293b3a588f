//! Settings parser for .opsdeck/config.toml

use std::path::{Path, PathBuf};

use opsdeck_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const OPSDECK_DIR: &str = ".opsdeck";

/// Load settings for a dashboard rooted at `base_dir`.
///
/// Resolution order: `<base_dir>/.opsdeck/config.toml`, then the user-level
/// config directory, then defaults. A malformed file is logged and treated
/// as absent so a typo never blocks the dashboard from starting.
pub fn load_settings(base_dir: &Path) -> Settings {
    for path in candidate_paths(base_dir) {
        if !path.exists() {
            continue;
        }
        match try_load(&path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                return settings;
            }
            Err(err) => {
                warn!("Ignoring settings file {}: {err}", path.display());
            }
        }
    }
    Settings::default()
}

/// Parse one settings file, surfacing errors to the caller
pub fn try_load(path: &Path) -> Result<Settings> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|err| Error::config_invalid(err.to_string()))
}

fn candidate_paths(base_dir: &Path) -> Vec<PathBuf> {
    let mut paths = vec![base_dir.join(OPSDECK_DIR).join(CONFIG_FILENAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("opsdeck").join(CONFIG_FILENAME));
    }
    paths
}
