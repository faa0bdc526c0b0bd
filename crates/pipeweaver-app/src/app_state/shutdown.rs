//! Graceful shutdown: drop the shell, release the window, stop host tasks.

use super::core::PipeweaverApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

impl PipeweaverApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Drop the shell (its surface owns the content view, its host link
    ///    owns the command receiver)
    /// 2. Release the window
    /// 3. Shut down the tokio runtime (daemon monitor, instance listener)
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.shell = None;
        self.host = None;

        self.window = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        tracing::info!("Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::PipeweaverApp;
    use pipeweaver_config::PipeweaverConfig;
    use pipeweaver_shell::HostLink;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = PipeweaverApp::new(PipeweaverConfig::default(), HostLink::detached(), None);

        app.shutdown();

        assert!(app.shell.is_none());
        assert!(app.host.is_none());
        assert!(app.window.is_none());
        assert!(app.tokio_runtime.is_none());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = PipeweaverApp::new(PipeweaverConfig::default(), HostLink::detached(), None);

        app.shutdown();
        app.shutdown();

        assert!(app.host.is_none());
    }

    #[test]
    fn shutdown_stops_the_runtime() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let mut app = PipeweaverApp::new(
            PipeweaverConfig::default(),
            HostLink::detached(),
            Some(runtime),
        );

        app.shutdown();

        assert!(app.tokio_runtime.is_none());
    }

    #[test]
    fn settings_follow_config() {
        let mut config = PipeweaverConfig::default();
        config.window.min_width = 1200;
        let app = PipeweaverApp::new(config, HostLink::detached(), None);

        assert_eq!(app.settings.minimum.width, 1200);
        assert!(!app.should_exit);
    }
}
