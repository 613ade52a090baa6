//! Settings parser for `config.toml`

use std::path::{Path, PathBuf};

use super::types::Settings;
use maestro_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "maestro-console";

/// Default config file location: `<config dir>/maestro-console/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from [`default_config_path`] when `None`.
///
/// A missing file yields defaults. A file that cannot be read or parsed is
/// logged and also yields defaults; the console never refuses to start over
/// its config.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    match read_settings(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(Error::ConfigNotFound { path }) => {
            debug!("No config file at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            warn!("Ignoring {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Read and parse one config file.
pub fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&content).map_err(|e| Error::config(format!("{}: {e}", path.display())))
}
