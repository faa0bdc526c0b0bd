//! Host-side collaborators of the window shell.
//!
//! - [`JsonGeometryStore`] persists window geometry between runs
//! - [`command_channel`] carries host commands to the UI loop and wakes it
//! - [`instance`] keeps a single shell running per session
//! - [`daemon`] watches the backend connection and closes the shell when it drops

pub mod channel;
pub mod daemon;
pub mod geometry_store;
pub mod instance;

pub use channel::{command_channel, CommandReceiver, CommandSender};
pub use daemon::monitor_daemon;
pub use geometry_store::JsonGeometryStore;
