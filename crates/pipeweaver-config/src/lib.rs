//! Pipeweaver shell configuration.
//!
//! TOML-based configuration with validation. All config sections use
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pipeweaver_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("debounce: {:?}", config.timing.debounce());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HostConfig, PipeweaverConfig, TimingConfig, WindowConfig};

use pipeweaver_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path is created with a commented template if missing. An
/// explicit path must exist. The result is validated either way.
pub fn load_config(path: Option<&Path>) -> Result<PipeweaverConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PipeweaverConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
