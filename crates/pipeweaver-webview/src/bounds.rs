//! Coordinate conversion for the content view.

/// The content view covers the whole client area, so its rect is the
/// window's inner size at the origin.
pub fn full_window_rect(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}
