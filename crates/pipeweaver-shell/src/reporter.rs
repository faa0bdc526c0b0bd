//! Debounced geometry reporting.
//!
//! Drag and resize produce bounds events at pointer rate. The reporter
//! restarts a single quiet-period timer on every event and only hands the
//! bounds to the host once the window has been still for the whole period.

use std::time::{Duration, Instant};

use pipeweaver_common::{BoundsField, WindowGeometry};
use tracing::{debug, trace};

use crate::host::HostLink;
use crate::timers::Debounce;

/// What a call to [`GeometryReporter::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Nothing was due.
    Idle,
    /// The bounds were written to the host.
    Written(WindowGeometry),
    /// The timer fired while the window was hidden or closing.
    SkippedHidden,
    /// The timer fired with no geometry store attached.
    SkippedNoHost,
}

#[derive(Debug, Clone)]
pub struct GeometryReporter {
    timer: Debounce,
}

impl GeometryReporter {
    pub fn new(quiet: Duration) -> Self {
        Self {
            timer: Debounce::new(quiet),
        }
    }

    pub fn on_bounds_changed(&mut self, field: BoundsField, now: Instant) {
        trace!(?field, "bounds changed, restarting debounce");
        self.timer.restart(now);
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Forget an unflushed change. The last stable geometry stays with the
    /// host.
    pub fn drop_pending(&mut self) {
        if self.timer.is_pending() {
            debug!("dropping unflushed geometry change");
        }
        self.timer.cancel();
    }

    /// Write `bounds` to the host if the quiet period has elapsed.
    pub fn poll(
        &mut self,
        now: Instant,
        bounds: WindowGeometry,
        visible: bool,
        host: &mut HostLink,
    ) -> ReportOutcome {
        if !self.timer.fire(now) {
            return ReportOutcome::Idle;
        }

        if !visible {
            debug!(%bounds, "window not visible, skipping geometry write");
            return ReportOutcome::SkippedHidden;
        }

        match host.geometry_store_mut() {
            Ok(store) => {
                debug!(%bounds, "reporting geometry");
                store.set_geometry(bounds);
                ReportOutcome::Written(bounds)
            }
            Err(e) => {
                debug!(error = %e, "skipping geometry write");
                ReportOutcome::SkippedNoHost
            }
        }
    }
}
