//! Host command delivery.
//!
//! The host pushes commands into its queue and wakes the event loop; the
//! bridge drains that queue on every wake-up and, as a floor, once per poll
//! interval. A check with no command source attached is a no-op.

use std::time::{Duration, Instant};

use pipeweaver_common::{coalesce, NotificationCommand, ShellError};
use tracing::{debug, trace};

use crate::host::HostLink;
use crate::timers::Interval;

#[derive(Debug, Clone)]
pub struct NotificationBridge {
    interval: Interval,
    checks: u64,
}

impl NotificationBridge {
    pub fn new(poll_interval: Duration, now: Instant) -> Self {
        Self {
            interval: Interval::new(poll_interval, now),
            checks: 0,
        }
    }

    /// Number of times the host's `check_notifications` has been invoked.
    pub fn checks(&self) -> u64 {
        self.checks
    }

    pub fn next_deadline(&self) -> Instant {
        self.interval.next_deadline()
    }

    /// Interval-driven check. Returns nothing unless a poll tick is due.
    pub fn poll(&mut self, now: Instant, host: &mut HostLink) -> Vec<NotificationCommand> {
        if !self.interval.tick(now) {
            return Vec::new();
        }
        self.check(host)
    }

    /// Check immediately, regardless of the poll interval.
    pub fn check(&mut self, host: &mut HostLink) -> Vec<NotificationCommand> {
        let source = match host.command_source_mut() {
            Ok(source) => source,
            Err(_) => return Vec::new(),
        };

        self.checks += 1;
        match source.check_notifications() {
            Ok(pending) if pending.is_empty() => Vec::new(),
            Ok(pending) => {
                let commands = coalesce(pending);
                trace!(?commands, "host commands pending");
                commands
            }
            Err(ShellError::HostUnavailable) => {
                debug!("command source disconnected, detaching");
                host.detach_command_source();
                Vec::new()
            }
            Err(e) => {
                debug!(error = %e, "notification check failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::QueueSource;
    use NotificationCommand::{Activate, Close};

    const POLL: Duration = Duration::from_millis(20);

    #[test]
    fn poll_checks_once_per_interval() {
        let t0 = Instant::now();
        let (source, queue) = QueueSource::new();
        let mut host = HostLink::detached().with_command_source(source);
        let mut bridge = NotificationBridge::new(POLL, t0);

        bridge.poll(t0 + Duration::from_millis(5), &mut host);
        assert_eq!(queue.checks(), 0);

        for k in 1..=5u32 {
            bridge.poll(t0 + POLL * k, &mut host);
        }
        assert_eq!(queue.checks(), 5);
        assert_eq!(bridge.checks(), 5);
    }

    #[test]
    fn no_checks_without_source() {
        let t0 = Instant::now();
        let mut host = HostLink::detached();
        let mut bridge = NotificationBridge::new(POLL, t0);

        for k in 1..=5u32 {
            assert!(bridge.poll(t0 + POLL * k, &mut host).is_empty());
        }
        assert_eq!(bridge.checks(), 0);
    }

    #[test]
    fn drains_in_order_with_repeats_collapsed() {
        let (source, queue) = QueueSource::new();
        let mut host = HostLink::detached().with_command_source(source);
        let mut bridge = NotificationBridge::new(POLL, Instant::now());

        queue.push(Activate);
        queue.push(Activate);
        queue.push(Close);
        assert_eq!(bridge.check(&mut host), vec![Activate, Close]);
        assert!(bridge.check(&mut host).is_empty());
    }

    #[test]
    fn disconnected_source_is_detached() {
        let (source, queue) = QueueSource::new();
        let mut host = HostLink::detached().with_command_source(source);
        let mut bridge = NotificationBridge::new(POLL, Instant::now());

        queue.disconnect();
        assert!(bridge.check(&mut host).is_empty());
        assert!(!host.has_command_source());

        bridge.check(&mut host);
        assert_eq!(queue.checks(), 1);
    }
}
