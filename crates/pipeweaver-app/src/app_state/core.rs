//! PipeweaverApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use pipeweaver_config::PipeweaverConfig;
use pipeweaver_shell::{HostLink, ShellSettings, WindowShell};
use pipeweaver_webview::WebViewManager;

use super::surface::WinitSurface;

/// Top-level application state.
pub struct PipeweaverApp {
    pub(super) config: PipeweaverConfig,
    pub(super) settings: ShellSettings,

    /// Host collaborators, handed to the shell once the window exists.
    pub(super) host: Option<HostLink>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) webviews: WebViewManager,
    pub(super) shell: Option<WindowShell<WinitSurface>>,

    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl PipeweaverApp {
    pub fn new(
        config: PipeweaverConfig,
        host: HostLink,
        tokio_runtime: Option<tokio::runtime::Runtime>,
    ) -> Self {
        let settings = ShellSettings::from_config(&config);
        Self {
            config,
            settings,
            host: Some(host),
            window: None,
            webviews: WebViewManager::new(),
            shell: None,
            tokio_runtime,
            should_exit: false,
        }
    }
}
