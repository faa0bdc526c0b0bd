//! The window shell: one visible window, its bounds, and the cooperative
//! tasks that keep it in step with the host.

use std::time::{Duration, Instant};

use pipeweaver_common::{BoundsField, MinimumSize, NotificationCommand, WindowGeometry};
use pipeweaver_config::PipeweaverConfig;
use tracing::{debug, info, trace};

use crate::bridge::NotificationBridge;
use crate::host::HostLink;
use crate::lifecycle::{CloseOutcome, LifecycleController, ShellLifecycleState};
use crate::maintenance::{MaintenanceTrigger, GC_SCRIPT};
use crate::reporter::GeometryReporter;
use crate::surface::WindowSurface;


/// Sizes and cadences the shell runs with.
#[derive(Debug, Clone)]
pub struct ShellSettings {
    pub minimum: MinimumSize,
    pub default_geometry: WindowGeometry,
    pub debounce: Duration,
    pub poll_interval: Duration,
    pub maintenance_interval: Duration,
    pub maintenance_followup: Duration,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self::from_config(&PipeweaverConfig::default())
    }
}

impl ShellSettings {
    pub fn from_config(config: &PipeweaverConfig) -> Self {
        Self {
            minimum: config.window.minimum_size(),
            default_geometry: config.window.default_geometry(),
            debounce: config.timing.debounce(),
            poll_interval: config.timing.poll_interval(),
            maintenance_interval: config.timing.maintenance_interval(),
            maintenance_followup: config.timing.maintenance_followup(),
        }
    }

    /// Geometry to create the window with: the host's stored value if it
    /// has one, the default otherwise, never below the minimum.
    pub fn initial_geometry(&self, host: &HostLink) -> WindowGeometry {
        match host.stored_geometry() {
            Some(stored) => {
                debug!(%stored, "restoring host geometry");
                stored.clamped(self.minimum)
            }
            None => {
                debug!(default = %self.default_geometry, "no host geometry, using default");
                self.default_geometry.clamped(self.minimum)
            }
        }
    }
}

pub struct WindowShell<S: WindowSurface> {
    surface: S,
    host: HostLink,
    minimum: MinimumSize,
    bounds: WindowGeometry,
    reporter: GeometryReporter,
    bridge: NotificationBridge,
    lifecycle: LifecycleController,
    maintenance: MaintenanceTrigger,
}

impl<S: WindowSurface> WindowShell<S> {
    /// Build the shell around an already-created surface. All timers start
    /// at `now`.
    pub fn new(surface: S, host: HostLink, settings: &ShellSettings, now: Instant) -> Self {
        let bounds = settings.initial_geometry(&host);
        info!(%bounds, "window shell started");
        Self {
            surface,
            host,
            minimum: settings.minimum,
            bounds,
            reporter: GeometryReporter::new(settings.debounce),
            bridge: NotificationBridge::new(settings.poll_interval, now),
            lifecycle: LifecycleController::new(),
            maintenance: MaintenanceTrigger::new(
                settings.maintenance_interval,
                settings.maintenance_followup,
                now,
            ),
        }
    }

    pub fn x(&self) -> i32 {
        self.bounds.x
    }

    pub fn y(&self) -> i32 {
        self.bounds.y
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn bounds(&self) -> WindowGeometry {
        self.bounds
    }

    pub fn minimum(&self) -> MinimumSize {
        self.minimum
    }

    /// Shown to the user and not closing.
    pub fn is_visible(&self) -> bool {
        self.lifecycle.is_open() && self.surface.is_visible()
    }

    pub fn state(&self) -> ShellLifecycleState {
        self.lifecycle.state()
    }

    pub fn is_closed(&self) -> bool {
        self.lifecycle.is_closed()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn host(&self) -> &HostLink {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut HostLink {
        &mut self.host
    }

    /// Times the host's notification check has run.
    pub fn notification_checks(&self) -> u64 {
        self.bridge.checks()
    }

    /// Record new bounds. Sizes below the minimum are clamped and pushed
    /// back to the surface. Returns the fields that changed, each of which
    /// restarts the geometry debounce.
    pub fn set_bounds(&mut self, observed: WindowGeometry, now: Instant) -> Vec<BoundsField> {
        if !self.lifecycle.is_open() {
            return Vec::new();
        }

        let bounds = observed.clamped(self.minimum);
        if let Err(e) = observed.check_minimum(self.minimum) {
            debug!(error = %e, %bounds, "clamping to minimum size");
            self.surface.apply_bounds(bounds);
        }

        let changed = self.bounds.changed_fields(&bounds);
        self.bounds = bounds;
        for field in &changed {
            self.reporter.on_bounds_changed(*field, now);
        }
        changed
    }

    pub fn set_position(&mut self, x: i32, y: i32, now: Instant) -> Vec<BoundsField> {
        let bounds = WindowGeometry { x, y, ..self.bounds };
        self.set_bounds(bounds, now)
    }

    pub fn set_size(&mut self, width: i32, height: i32, now: Instant) -> Vec<BoundsField> {
        let bounds = WindowGeometry {
            width,
            height,
            ..self.bounds
        };
        self.set_bounds(bounds, now)
    }

    /// Raise and focus the window.
    pub fn activate(&mut self) {
        if !self.lifecycle.is_open() {
            return;
        }
        debug!("activating window");
        self.surface.raise();
    }

    /// Close through the lifecycle: drop any unflushed geometry change, give
    /// the host its handshake, then reach `Closed`.
    pub fn request_close(&mut self) -> CloseOutcome {
        if !self.lifecycle.begin_close() {
            return CloseOutcome::AlreadyClosing;
        }
        self.reporter.drop_pending();
        let handshake = self.lifecycle.finish_close(&mut self.host);
        CloseOutcome::Closed { handshake }
    }

    /// The host pushed a wake-up: check for commands now.
    pub fn notify(&mut self) -> ShellLifecycleState {
        if self.lifecycle.is_open() {
            let commands = self.bridge.check(&mut self.host);
            self.dispatch(commands);
        }
        self.state()
    }

    /// Run every timer that is due at `now`.
    pub fn tick(&mut self, now: Instant) -> ShellLifecycleState {
        if !self.lifecycle.is_open() {
            return self.state();
        }

        let visible = self.is_visible();
        self.reporter.poll(now, self.bounds, visible, &mut self.host);

        let commands = self.bridge.poll(now, &mut self.host);
        self.dispatch(commands);

        if self.lifecycle.is_open() {
            if let Some(pass) = self.maintenance.poll(now) {
                trace!(?pass, "renderer maintenance");
                if let Err(e) = self.surface.run_script(GC_SCRIPT) {
                    trace!(error = %e, "maintenance directive ignored");
                }
            }
        }

        self.state()
    }

    /// Earliest instant any timer wants to run. `None` once closed.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.lifecycle.is_open() {
            return None;
        }
        let mut next = self.bridge.next_deadline().min(self.maintenance.next_deadline());
        if let Some(deadline) = self.reporter.deadline() {
            next = next.min(deadline);
        }
        Some(next)
    }

    fn dispatch(&mut self, commands: Vec<NotificationCommand>) {
        for command in commands {
            debug!(trigger = command.trigger(), "host command");
            match command {
                NotificationCommand::Activate => self.activate(),
                NotificationCommand::Close => {
                    self.request_close();
                }
            }
        }
    }
}
