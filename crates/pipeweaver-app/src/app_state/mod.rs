//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the content view and the [`WindowShell`]
//! that keeps them in step with the host.
//!
//! [`WindowShell`]: pipeweaver_shell::WindowShell

mod core;
mod event_handler;
mod geometry;
mod init;
mod polling;
mod shutdown;
mod surface;
mod types;

pub use core::PipeweaverApp;
pub use types::UserEvent;
