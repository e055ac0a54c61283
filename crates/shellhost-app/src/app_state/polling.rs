//! Periodic polling and wake scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::ShellApp;
use super::types::POLL_INTERVAL;

impl ShellApp {
    /// Poll webview events and the loader, then sleep until the next poll
    /// or the next retry, whichever comes first.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_loader(now);
        }

        let mut wake = Instant::now() + POLL_INTERVAL;
        if let Some(deadline) = self.next_load_deadline() {
            wake = wake.min(deadline);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }
}
