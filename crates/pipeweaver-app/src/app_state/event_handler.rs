//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::PipeweaverApp;
use super::geometry::{logical_position, logical_size};
use super::types::UserEvent;

impl ApplicationHandler<UserEvent> for PipeweaverApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            tracing::error!("Startup failed: {e}");
            crate::dialog::display_error(&e.to_string());
            self.should_exit = true;
            event_loop.exit();
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Wake => {
                if let Some(ref mut shell) = self.shell {
                    shell.notify();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let scale = match &self.window {
            Some(w) => w.scale_factor(),
            None => return,
        };
        let Some(ref mut shell) = self.shell else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                let outcome = shell.request_close();
                tracing::debug!(?outcome, "close handled");
            }

            WindowEvent::Moved(position) => {
                let (x, y) = logical_position(position, scale);
                shell.set_position(x, y, Instant::now());
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    let (width, height) = logical_size(size, scale);
                    shell.set_size(width, height, Instant::now());
                    shell.surface().fit_content(width, height);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}
