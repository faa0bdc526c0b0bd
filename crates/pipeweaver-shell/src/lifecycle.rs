//! Close handshake.
//!
//! `Open -> ClosePending -> Closed`. The host gets exactly one synchronous
//! chance to flush state while pending; a missing host never blocks the
//! close.

use pipeweaver_common::ShellError;
use tracing::{debug, info};

use crate::host::HostLink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellLifecycleState {
    Open,
    ClosePending,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The window reached `Closed`. `handshake` says whether the host's
    /// close handler ran.
    Closed { handshake: bool },
    /// A close was already under way or finished.
    AlreadyClosing,
}

#[derive(Debug, Clone)]
pub struct LifecycleController {
    state: ShellLifecycleState,
}

impl LifecycleController {
    pub fn new() -> Self {
        Self {
            state: ShellLifecycleState::Open,
        }
    }

    pub fn state(&self) -> ShellLifecycleState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ShellLifecycleState::Open
    }

    pub fn is_closed(&self) -> bool {
        self.state == ShellLifecycleState::Closed
    }

    /// `Open -> ClosePending`. Returns `false` if not open.
    pub fn begin_close(&mut self) -> bool {
        if self.state != ShellLifecycleState::Open {
            return false;
        }
        info!("close requested");
        self.state = ShellLifecycleState::ClosePending;
        true
    }

    /// Run the host handshake, then `ClosePending -> Closed`.
    ///
    /// Returns whether the handshake ran. Does nothing unless pending.
    pub fn finish_close(&mut self, host: &mut HostLink) -> bool {
        if self.state != ShellLifecycleState::ClosePending {
            return false;
        }

        let handshake = match host.geometry_store_mut() {
            Ok(store) => {
                let acknowledged = store.handle_close_request();
                debug!(acknowledged, "host close handshake complete");
                true
            }
            Err(ShellError::HostUnavailable) => {
                debug!("host unavailable, closing without handshake");
                false
            }
            Err(e) => {
                debug!(error = %e, "closing without handshake");
                false
            }
        };

        self.state = ShellLifecycleState::Closed;
        info!(handshake, "window closed");
        handshake
    }
}

impl Default for LifecycleController {
    fn default() -> Self {
        Self::new()
    }
}
