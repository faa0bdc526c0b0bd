//! Periodic garbage-collection nudge for the embedded content runtime.

use std::time::{Duration, Instant};

use crate::timers::Interval;

/// Asks the page's runtime for a collection pass. Runtimes that do not
/// expose `gc` skip it.
pub const GC_SCRIPT: &str = "if (typeof window.gc === 'function') { window.gc(); }";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenancePass {
    /// The scheduled collection.
    Primary,
    /// The second collection, catching what the first one freed.
    Followup,
}

#[derive(Debug, Clone)]
pub struct MaintenanceTrigger {
    interval: Interval,
    followup_delay: Duration,
    followup_at: Option<Instant>,
}

impl MaintenanceTrigger {
    pub fn new(interval: Duration, followup_delay: Duration, now: Instant) -> Self {
        Self {
            interval: Interval::new(interval, now),
            followup_delay,
            followup_at: None,
        }
    }

    pub fn next_deadline(&self) -> Instant {
        match self.followup_at {
            Some(at) => at.min(self.interval.next_deadline()),
            None => self.interval.next_deadline(),
        }
    }

    /// The pass due at `now`, if any. At most one pass per call.
    pub fn poll(&mut self, now: Instant) -> Option<MaintenancePass> {
        if let Some(at) = self.followup_at {
            if now >= at {
                self.followup_at = None;
                return Some(MaintenancePass::Followup);
            }
        }

        if self.interval.tick(now) {
            self.followup_at = Some(now + self.followup_delay);
            return Some(MaintenancePass::Primary);
        }

        None
    }
}
