//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod host;
mod timing;
mod window;

pub use host::*;
pub use timing::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeweaverConfig {
    pub window: WindowConfig,
    pub timing: TimingConfig,
    pub host: HostConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: PipeweaverConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "Pipeweaver");
        assert_eq!(config.timing.poll_interval_ms, 20);
        assert!(config.host.require_daemon);
    }

    #[test]
    fn sections_override_independently() {
        let config: PipeweaverConfig = toml::from_str(
            r#"
[timing]
debounce_ms = 500

[host]
require_daemon = false
"#,
        )
        .unwrap();
        assert_eq!(config.timing.debounce_ms, 500);
        assert_eq!(config.timing.maintenance_interval_ms, 10_000);
        assert!(!config.host.require_daemon);
        assert_eq!(config.window.min_height, 600);
    }
}
