//! winit ApplicationHandler implementation.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::ShellApp;
use super::factory::WindowFactory;
use super::types::ShellEvent;

impl ApplicationHandler<ShellEvent> for ShellApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit || self.host.has_primary() {
            return;
        }
        if !self.create_primary(event_loop) && self.host.surface_count() == 0 {
            tracing::error!("No surface could be created, exiting");
            self.shutdown();
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(&surface) = self.windows.get(&window_id) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(%surface, "Window close requested");
                self.on_surface_closed(surface, event_loop);
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(target) = self.surface(surface) {
                        target.sync_webview_bounds();
                    }
                }
            }
            WindowEvent::Destroyed => {
                self.windows.remove(&window_id);
            }
            _ => {}
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: ShellEvent) {
        match event {
            ShellEvent::Host(request) => {
                if self.should_exit {
                    return;
                }
                let mut factory = WindowFactory {
                    event_loop,
                    webviews: &self.webviews,
                    windows: &mut self.windows,
                };
                self.host.serve(request, &mut factory);
                if self.host.quit_requested() {
                    tracing::info!("Quit requested");
                    self.shutdown();
                    event_loop.exit();
                }
            }
            ShellEvent::Reply {
                surface,
                doc,
                id,
                envelope,
            } => self.deliver_reply(surface, &doc, id, &envelope),
            ShellEvent::ProbeFinished { attempt, outcome } => {
                self.on_probe_finished(attempt, outcome);
            }
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
