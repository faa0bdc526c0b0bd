//! State synchronization and lifecycle control between the window shell
//! and its host.
//!
//! Everything here is independent of the windowing toolkit. The shell is
//! driven from a single-threaded event loop: callers feed it bounds
//! changes and wake-ups, call [`WindowShell::tick`] with the current time,
//! and sleep until [`WindowShell::next_deadline`].

pub mod bridge;
pub mod host;
pub mod lifecycle;
pub mod maintenance;
pub mod reporter;
pub mod shell;
pub mod surface;
pub mod timers;

#[cfg(test)]
pub(crate) mod testing;

pub use bridge::NotificationBridge;
pub use host::{CommandSource, GeometryStore, HostLink};
pub use lifecycle::{CloseOutcome, LifecycleController, ShellLifecycleState};
pub use maintenance::{MaintenancePass, MaintenanceTrigger, GC_SCRIPT};
pub use reporter::{GeometryReporter, ReportOutcome};
pub use shell::{ShellSettings, WindowShell};
pub use surface::WindowSurface;
