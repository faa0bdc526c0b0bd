//! Window creation and content view setup.

use std::sync::Arc;
use std::time::Instant;

use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use pipeweaver_common::PipeweaverError;
use pipeweaver_shell::{HostLink, WindowShell};
use pipeweaver_webview::{full_window_rect, WebViewConfig};

use super::core::PipeweaverApp;
use super::surface::WinitSurface;

impl PipeweaverApp {
    /// Create the window at its restored geometry, load the content and
    /// hand both to a new shell.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> pipeweaver_common::Result<()> {
        let host = self.host.take().unwrap_or_else(HostLink::detached);
        let initial = self.settings.initial_geometry(&host);
        let minimum = self.settings.minimum;

        tracing::info!(geometry = %initial, "opening window");

        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_position(LogicalPosition::new(initial.x, initial.y))
            .with_inner_size(LogicalSize::new(initial.width, initial.height))
            .with_min_inner_size(LogicalSize::new(minimum.width, minimum.height));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| PipeweaverError::Window(e.to_string()))?;

        let bounds = full_window_rect(f64::from(initial.width), f64::from(initial.height));
        let content_config = WebViewConfig::with_url(self.config.host.content_url.clone());
        let content = self
            .webviews
            .create(window.as_ref(), bounds, content_config)
            .map_err(|e| PipeweaverError::WebView(e.to_string()))?;

        tracing::debug!(url = content.url(), "content view attached");

        let surface = WinitSurface::new(Arc::clone(&window), content);
        self.shell = Some(WindowShell::new(
            surface,
            host,
            &self.settings,
            Instant::now(),
        ));
        self.window = Some(window);
        tracing::info!("Window created and content view loaded");
        Ok(())
    }
}
