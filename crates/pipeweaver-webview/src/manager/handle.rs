use pipeweaver_common::ShellError;
use wry::WebView;

/// Handle to the content view.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) url: String,
}

impl WebViewHandle {
    /// The page the view was navigated to at startup.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Execute JavaScript in the page. A runtime that cannot run it is
    /// reported as an unsupported operation.
    pub fn evaluate_script(&self, js: &str) -> Result<(), ShellError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| ShellError::RendererUnsupportedOperation(e.to_string()))
    }

    /// Set the view bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}
