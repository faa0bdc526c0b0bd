/// Configuration for the content view.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Page to load. Navigation stays on this page's origin.
    pub url: String,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
}

impl WebViewConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            devtools: cfg!(debug_assertions),
        }
    }
}
