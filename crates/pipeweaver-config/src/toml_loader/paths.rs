//! Where `shell.toml` lives and how a fresh one is written.

use pipeweaver_common::{ConfigError, APP_DIR_NAME};
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const CONFIG_FILE_NAME: &str = "shell.toml";

/// `<config_dir>/pipeweaver/shell.toml`. The geometry store keeps
/// `window.json` in the same directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no config directory on this platform".into()))
}

/// Write the commented template to `path`.
///
/// The template goes to a sibling `.tmp` file first and is renamed into
/// place, so an interrupted first launch never leaves a truncated config
/// that would fail to parse on the next one.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |e: std::io::Error| {
        ConfigError::ParseError(format!("cannot write default config {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let staging = path.with_extension("toml.tmp");
    std::fs::write(&staging, default_config_toml()).map_err(write_err)?;
    if let Err(e) = std::fs::rename(&staging, path) {
        let _ = std::fs::remove_file(&staging);
        return Err(write_err(e));
    }

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
