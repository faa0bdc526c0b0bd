//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod host;
mod timing;
mod window;


use crate::schema::PipeweaverConfig;
use pipeweaver_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PipeweaverConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    timing::validate_timing(&mut errors, config);
    host::validate_host(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
