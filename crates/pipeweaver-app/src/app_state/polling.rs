//! Timer-driven scheduling of the shell.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use pipeweaver_shell::ShellLifecycleState;
use pipeweaver_webview::WebViewEvent;

use super::core::PipeweaverApp;
use super::types::IDLE_WAIT;

impl PipeweaverApp {
    /// Run due timers and sleep until the next one.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_webview_events();

        let now = Instant::now();
        let Some(ref mut shell) = self.shell else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(now + IDLE_WAIT));
            return;
        };

        if shell.tick(now) == ShellLifecycleState::Closed {
            self.shutdown();
            self.should_exit = true;
            event_loop.exit();
            return;
        }

        match shell.next_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    /// Log what the content view reported since the last iteration.
    fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event {
                WebViewEvent::PageLoad { state, url } => {
                    tracing::info!(?state, %url, "content page load");
                }
                WebViewEvent::TitleChanged { title } => {
                    tracing::debug!(%title, "content title changed");
                }
                WebViewEvent::NavigationBlocked { url } => {
                    tracing::warn!(%url, "content tried to leave its origin");
                }
            }
        }
    }
}
