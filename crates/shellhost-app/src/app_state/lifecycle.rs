//! Primary surface creation and the exit policy.

use shellhost_bridge::{SurfaceFactory, SurfaceId, SurfaceSpec};
use winit::event_loop::ActiveEventLoop;

use super::core::ShellApp;
use super::factory::WindowFactory;
use super::surface::WindowSurface;

impl ShellApp {
    /// Create the primary surface from startup config and start loading
    /// its target. Returns `false` if the surface could not be created.
    pub(super) fn create_primary(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let startup = &self.config.startup;
        let (width, height) = startup.size();
        let spec = SurfaceSpec::primary(
            startup.url.clone(),
            width,
            height,
            startup.position(),
            startup.fullscreen(),
        );

        let mut factory = WindowFactory {
            event_loop,
            webviews: &self.webviews,
            windows: &mut self.windows,
        };
        match factory.create(SurfaceId::Primary, &spec) {
            Ok(surface) => {
                tracing::info!(
                    url = %spec.url,
                    width,
                    height,
                    fullscreen = spec.fullscreen,
                    "Primary surface created"
                );
                self.host.install_primary(surface, spec.url.clone());
                self.start_loading(spec.url);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create primary surface");
                false
            }
        }
    }

    /// A surface went away through its window controls.
    pub(super) fn on_surface_closed(&mut self, surface: SurfaceId, event_loop: &ActiveEventLoop) {
        if surface == SurfaceId::Primary {
            self.loader = None;
        }
        if self.host.surface_closed(surface) {
            self.on_last_surface_closed(event_loop);
        }
    }

    // Every platform exits: winit has no dock-reactivation event.
    fn on_last_surface_closed(&mut self, event_loop: &ActiveEventLoop) {
        tracing::info!("Last surface closed, exiting");
        self.shutdown();
        event_loop.exit();
    }

    pub(super) fn surface(&self, id: SurfaceId) -> Option<&WindowSurface> {
        match id {
            SurfaceId::Primary => self.host.primary().map(|p| &p.surface),
            SurfaceId::Secondary(handle) => self.host.registry().get(handle).map(|s| s.surface()),
        }
    }

    pub(super) fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut WindowSurface> {
        match id {
            SurfaceId::Primary => self.host.primary_mut().map(|p| &mut p.surface),
            SurfaceId::Secondary(handle) => self
                .host
                .registry_mut()
                .get_mut(handle)
                .map(|s| s.surface_mut()),
        }
    }
}
