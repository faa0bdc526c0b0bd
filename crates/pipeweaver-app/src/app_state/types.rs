//! Internal types and constants for the app state module.

use std::time::Duration;

/// Events injected into the winit loop from host threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    /// A host command is queued; drain it now rather than at the next tick.
    Wake,
}

/// Wait between loop iterations before the shell exists.
pub(super) const IDLE_WAIT: Duration = Duration::from_millis(100);

/// How long background host tasks get to finish on exit.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);
