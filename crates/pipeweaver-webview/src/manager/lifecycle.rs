use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the content view as a child of `window`, covering `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_focused(true)
            .with_url(&config.url);

        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events));
        builder =
            Self::attach_navigation_handler(builder, Arc::clone(&self.events), config.url.clone());

        let webview = builder.build_as_child(window)?;
        debug!(url = %config.url, "content view created");

        Ok(WebViewHandle {
            webview,
            url: config.url,
        })
    }
}
