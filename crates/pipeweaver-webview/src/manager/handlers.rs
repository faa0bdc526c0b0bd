use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

/// `scheme://host[:port]` of `url`, or `None` if it has no authority.
pub fn origin_of(url: &str) -> Option<&str> {
    let scheme_end = url.find("://")? + 3;
    let rest = &url[scheme_end..];
    let authority_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    if authority_len == 0 {
        return None;
    }
    Some(&url[..scheme_end + authority_len])
}

/// Whether `url` stays on the same origin as `content_url`.
pub fn is_navigation_allowed(content_url: &str, url: &str) -> bool {
    if url == "about:blank" {
        return true;
    }
    match (origin_of(content_url), origin_of(url)) {
        (Some(home), Some(target)) => home.eq_ignore_ascii_case(target),
        _ => false,
    }
}

impl WebViewManager {
    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad { state, url });
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::TitleChanged { title });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        content_url: String,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if is_navigation_allowed(&content_url, &url) {
                return true;
            }
            warn!(url = %url, "navigation blocked");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::NavigationBlocked { url });
            }
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_extraction() {
        assert_eq!(
            origin_of("http://localhost:14565/mixer?x=1"),
            Some("http://localhost:14565")
        );
        assert_eq!(origin_of("http://localhost:14565"), Some("http://localhost:14565"));
        assert_eq!(origin_of("about:blank"), None);
        assert_eq!(origin_of("file:///etc/passwd"), None);
    }

    #[test]
    fn same_origin_navigation_is_allowed() {
        let home = "http://localhost:14565/";
        assert!(is_navigation_allowed(home, "http://localhost:14565/settings"));
        assert!(is_navigation_allowed(home, "HTTP://LOCALHOST:14565/"));
        assert!(is_navigation_allowed(home, "about:blank"));
    }

    #[test]
    fn foreign_navigation_is_blocked() {
        let home = "http://localhost:14565/";
        assert!(!is_navigation_allowed(home, "http://localhost:8080/"));
        assert!(!is_navigation_allowed(home, "https://example.com/"));
        assert!(!is_navigation_allowed(home, "javascript:alert(1)"));
        assert!(!is_navigation_allowed(home, "http://localhost:14565.evil.com/"));
    }
}
