//! The embedded content view.
//!
//! Wraps the `wry` crate to provide:
//! - One WebView filling the shell window, navigated once at startup
//! - Navigation pinned to the content origin
//! - Script injection for runtime maintenance
//! - Page load and title events for the main loop to log

pub mod bounds;
pub mod events;
pub mod manager;

pub use bounds::full_window_rect;
pub use events::{PageLoadState, WebViewEvent};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
