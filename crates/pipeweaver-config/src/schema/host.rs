//! Host endpoints and identity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Page the content view navigates to once at startup.
    pub content_url: String,
    /// Websocket the shell holds open to detect the daemon going away.
    pub daemon_url: String,
    /// Refuse to start when the daemon cannot be reached.
    pub require_daemon: bool,
    /// Names the IPC socket and the geometry directory.
    pub app_name: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            content_url: "http://localhost:14565/".into(),
            daemon_url: "ws://localhost:14565/api/websocket".into(),
            require_daemon: true,
            app_name: "pipeweaver-app".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_config_defaults() {
        let config = HostConfig::default();
        assert_eq!(config.content_url, "http://localhost:14565/");
        assert_eq!(config.daemon_url, "ws://localhost:14565/api/websocket");
        assert!(config.require_daemon);
        assert_eq!(config.app_name, "pipeweaver-app");
    }
}
