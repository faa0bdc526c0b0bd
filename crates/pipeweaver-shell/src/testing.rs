//! In-memory host and surface doubles shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use pipeweaver_common::{NotificationCommand, ShellError, WindowGeometry};

use crate::host::{CommandSource, GeometryStore};
use crate::surface::WindowSurface;

#[derive(Debug, Default)]
pub(crate) struct StoreLog {
    pub initial: Option<WindowGeometry>,
    pub writes: Vec<WindowGeometry>,
    pub close_requests: u32,
}

pub(crate) struct RecordingStore(Rc<RefCell<StoreLog>>);

impl RecordingStore {
    pub fn empty() -> (Self, Rc<RefCell<StoreLog>>) {
        let log = Rc::new(RefCell::new(StoreLog::default()));
        (Self(Rc::clone(&log)), log)
    }

    pub fn with_initial(geometry: WindowGeometry) -> (Self, Rc<RefCell<StoreLog>>) {
        let (store, log) = Self::empty();
        log.borrow_mut().initial = Some(geometry);
        (store, log)
    }
}

impl GeometryStore for RecordingStore {
    fn geometry(&self) -> Option<WindowGeometry> {
        let log = self.0.borrow();
        log.writes.last().copied().or(log.initial)
    }

    fn set_geometry(&mut self, geometry: WindowGeometry) {
        self.0.borrow_mut().writes.push(geometry);
    }

    fn handle_close_request(&mut self) -> bool {
        self.0.borrow_mut().close_requests += 1;
        true
    }
}

#[derive(Clone, Default)]
pub(crate) struct QueueHandle {
    pending: Rc<RefCell<VecDeque<NotificationCommand>>>,
    checks: Rc<Cell<u32>>,
    disconnected: Rc<Cell<bool>>,
}

impl QueueHandle {
    pub fn push(&self, command: NotificationCommand) {
        self.pending.borrow_mut().push_back(command);
    }

    pub fn checks(&self) -> u32 {
        self.checks.get()
    }

    pub fn disconnect(&self) {
        self.disconnected.set(true);
    }
}

pub(crate) struct QueueSource(QueueHandle);

impl QueueSource {
    pub fn new() -> (Self, QueueHandle) {
        let handle = QueueHandle::default();
        (Self(handle.clone()), handle)
    }
}

impl CommandSource for QueueSource {
    fn check_notifications(&mut self) -> Result<Vec<NotificationCommand>, ShellError> {
        self.0.checks.set(self.0.checks.get() + 1);
        let drained: Vec<_> = self.0.pending.borrow_mut().drain(..).collect();
        if drained.is_empty() && self.0.disconnected.get() {
            return Err(ShellError::HostUnavailable);
        }
        Ok(drained)
    }
}

#[derive(Debug)]
pub(crate) struct SurfaceLog {
    pub visible: bool,
    pub raises: u32,
    pub applied: Vec<WindowGeometry>,
    pub scripts: Vec<String>,
    pub scripts_supported: bool,
}

impl Default for SurfaceLog {
    fn default() -> Self {
        Self {
            visible: true,
            raises: 0,
            applied: Vec::new(),
            scripts: Vec::new(),
            scripts_supported: true,
        }
    }
}

pub(crate) struct FakeSurface(Rc<RefCell<SurfaceLog>>);

impl FakeSurface {
    pub fn new() -> (Self, Rc<RefCell<SurfaceLog>>) {
        let log = Rc::new(RefCell::new(SurfaceLog::default()));
        (Self(Rc::clone(&log)), log)
    }
}

impl WindowSurface for FakeSurface {
    fn is_visible(&self) -> bool {
        self.0.borrow().visible
    }

    fn raise(&mut self) {
        self.0.borrow_mut().raises += 1;
    }

    fn apply_bounds(&mut self, geometry: WindowGeometry) {
        self.0.borrow_mut().applied.push(geometry);
    }

    fn run_script(&mut self, script: &str) -> Result<(), ShellError> {
        let mut log = self.0.borrow_mut();
        log.scripts.push(script.to_string());
        if log.scripts_supported {
            Ok(())
        } else {
            Err(ShellError::RendererUnsupportedOperation("script".into()))
        }
    }
}
