//! The winit window and its content view, as seen by the shell.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::window::{UserAttentionType, Window};

use pipeweaver_common::{ShellError, WindowGeometry};
use pipeweaver_shell::WindowSurface;
use pipeweaver_webview::{full_window_rect, WebViewHandle};

pub struct WinitSurface {
    window: Arc<Window>,
    content: WebViewHandle,
}

impl WinitSurface {
    pub(super) fn new(window: Arc<Window>, content: WebViewHandle) -> Self {
        Self { window, content }
    }

    /// Stretch the content view over a client area of the given logical size.
    pub(super) fn fit_content(&self, width: i32, height: i32) {
        let rect = full_window_rect(f64::from(width), f64::from(height));
        if let Err(e) = self.content.set_bounds(rect) {
            tracing::warn!(error = %e, "failed to resize content view");
        }
    }
}

impl WindowSurface for WinitSurface {
    fn is_visible(&self) -> bool {
        // Wayland cannot report visibility; a mapped window is assumed shown.
        self.window.is_visible().unwrap_or(true)
    }

    fn raise(&mut self) {
        self.window.set_visible(true);
        self.window.set_minimized(false);
        self.window.focus_window();
        // Compositors that refuse focus stealing still flag the window.
        if !self.window.has_focus() {
            self.window
                .request_user_attention(Some(UserAttentionType::Informational));
        }
        if let Err(e) = self.content.focus() {
            tracing::debug!(error = %e, "content view did not take focus");
        }
    }

    fn apply_bounds(&mut self, geometry: WindowGeometry) {
        let _ = self
            .window
            .request_inner_size(LogicalSize::new(geometry.width, geometry.height));
        self.fit_content(geometry.width, geometry.height);
    }

    fn run_script(&mut self, script: &str) -> Result<(), ShellError> {
        self.content.evaluate_script(script)
    }
}
