//! Seams to the host process.
//!
//! The shell never owns the host. It holds two independently nullable
//! handles, and every consumer re-checks them on each use because either
//! may go away at any tick.

use pipeweaver_common::{NotificationCommand, ShellError, WindowGeometry};

/// Host-side owner of the persisted window geometry.
pub trait GeometryStore {
    /// Geometry to restore at window creation, if the host has one.
    fn geometry(&self) -> Option<WindowGeometry>;

    /// Record the latest stable geometry.
    fn set_geometry(&mut self, geometry: WindowGeometry);

    /// Flush final state before the window is allowed to close.
    ///
    /// Called at most once, synchronously. Returns whether the host
    /// acknowledged the request.
    fn handle_close_request(&mut self) -> bool;
}

/// Host-side queue of commands for the shell.
pub trait CommandSource {
    /// Take every command raised since the last check, in the order raised.
    ///
    /// Must not block. `Err(ShellError::HostUnavailable)` means the host
    /// side has gone and will never produce another command.
    fn check_notifications(&mut self) -> Result<Vec<NotificationCommand>, ShellError>;
}

/// The shell's view onto the host.
#[derive(Default)]
pub struct HostLink {
    geometry: Option<Box<dyn GeometryStore>>,
    commands: Option<Box<dyn CommandSource>>,
}

impl HostLink {
    /// A link with neither handle attached.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn with_geometry_store(mut self, store: impl GeometryStore + 'static) -> Self {
        self.geometry = Some(Box::new(store));
        self
    }

    pub fn with_command_source(mut self, source: impl CommandSource + 'static) -> Self {
        self.commands = Some(Box::new(source));
        self
    }

    pub fn detach_command_source(&mut self) -> Option<Box<dyn CommandSource>> {
        self.commands.take()
    }

    pub fn has_geometry_store(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn has_command_source(&self) -> bool {
        self.commands.is_some()
    }

    pub fn geometry_store(&self) -> Result<&dyn GeometryStore, ShellError> {
        match &self.geometry {
            Some(store) => Ok(store.as_ref()),
            None => Err(ShellError::HostUnavailable),
        }
    }

    pub fn geometry_store_mut(&mut self) -> Result<&mut Box<dyn GeometryStore>, ShellError> {
        self.geometry.as_mut().ok_or(ShellError::HostUnavailable)
    }

    pub fn command_source_mut(&mut self) -> Result<&mut Box<dyn CommandSource>, ShellError> {
        self.commands.as_mut().ok_or(ShellError::HostUnavailable)
    }

    /// Geometry the host wants restored, if connected and stored.
    pub fn stored_geometry(&self) -> Option<WindowGeometry> {
        self.geometry_store().ok().and_then(|store| store.geometry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{QueueSource, RecordingStore};

    #[test]
    fn detached_link_reports_host_unavailable() {
        let mut link = HostLink::detached();
        assert!(!link.has_geometry_store());
        assert!(!link.has_command_source());
        assert!(matches!(
            link.geometry_store_mut(),
            Err(ShellError::HostUnavailable)
        ));
        assert!(matches!(
            link.command_source_mut(),
            Err(ShellError::HostUnavailable)
        ));
        assert_eq!(link.stored_geometry(), None);
    }

    #[test]
    fn stored_geometry_comes_from_the_store() {
        let (store, _log) = RecordingStore::with_initial(WindowGeometry::new(50, 60, 1200, 800));
        let link = HostLink::detached().with_geometry_store(store);
        assert_eq!(
            link.stored_geometry(),
            Some(WindowGeometry::new(50, 60, 1200, 800))
        );
    }

    #[test]
    fn handles_detach_independently() {
        let (store, _log) = RecordingStore::empty();
        let (source, _queue) = QueueSource::new();
        let mut link = HostLink::detached()
            .with_geometry_store(store)
            .with_command_source(source);

        assert!(link.detach_command_source().is_some());
        assert!(link.has_geometry_store());
        assert!(!link.has_command_source());
        assert!(link.detach_command_source().is_none());
    }
}
