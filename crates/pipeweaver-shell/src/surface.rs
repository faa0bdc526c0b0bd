/// The visible window, as far as the shell needs to drive it.
pub trait WindowSurface {
    /// Whether the window is currently shown to the user.
    fn is_visible(&self) -> bool;

    /// Make the window maximally noticeable: un-minimize, raise, focus.
    ///
    /// Must be idempotent. What this means depends on the window manager;
    /// a compositor that refuses to reorder may only highlight the window.
    fn raise(&mut self);

    /// Force the presentation layer to the given bounds.
    fn apply_bounds(&mut self, geometry: pipeweaver_common::WindowGeometry);

    /// Inject a script into the embedded content runtime.
    fn run_script(&mut self, script: &str) -> Result<(), pipeweaver_common::ShellError>;
}
