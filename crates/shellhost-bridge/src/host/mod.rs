//! Host state: the primary surface, the secondary registry, quit intent.
//!
//! `HostState` is constructed at startup, owned by exactly one thread (the
//! event loop in the binary) and torn down at shutdown. Command handlers
//! never touch it directly; they send [`HostRequest`]s through a
//! [`HostClient`] and the owning thread applies them with
//! [`HostState::serve`].

mod request;

pub use request::{HostClient, HostRequest, Responder};

use shellhost_platform::RgbaSnapshot;

use crate::error::CommandError;
use crate::registry::SurfaceRegistry;
use crate::surface::{Surface, SurfaceFactory, SurfaceHandle, SurfaceId, SurfaceSpec};

/// The root surface and what it is meant to show.
#[derive(Debug)]
pub struct PrimarySurface<S> {
    pub surface: S,
    pub target: String,
}

#[derive(Debug)]
pub struct HostState<S> {
    primary: Option<PrimarySurface<S>>,
    secondaries: SurfaceRegistry<S>,
    quit_requested: bool,
}

impl<S> Default for HostState<S> {
    fn default() -> Self {
        Self {
            primary: None,
            secondaries: SurfaceRegistry::default(),
            quit_requested: false,
        }
    }
}

impl<S: Surface> HostState<S> {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // PRIMARY
    // =========================================================================

    /// Install a freshly created primary surface, replacing any previous one.
    pub fn install_primary(&mut self, surface: S, target: impl Into<String>) {
        let target = target.into();
        tracing::info!(url = %target, "Primary surface installed");
        self.primary = Some(PrimarySurface { surface, target });
    }

    pub fn primary(&self) -> Option<&PrimarySurface<S>> {
        self.primary.as_ref()
    }

    pub fn primary_mut(&mut self) -> Option<&mut PrimarySurface<S>> {
        self.primary.as_mut()
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    fn primary_surface_mut(&mut self) -> Result<&mut S, CommandError> {
        self.primary
            .as_mut()
            .map(|p| &mut p.surface)
            .ok_or(CommandError::PrimaryUnavailable)
    }

    /// Flip fullscreen on the primary surface. Returns the new state.
    pub fn toggle_fullscreen(&mut self) -> Result<bool, CommandError> {
        let surface = self.primary_surface_mut()?;
        let fullscreen = !surface.is_fullscreen();
        surface.set_fullscreen(fullscreen);
        tracing::debug!(fullscreen, "Primary fullscreen toggled");
        Ok(fullscreen)
    }

    /// Resize the primary surface, leaving fullscreen first if needed.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), CommandError> {
        let surface = self.primary_surface_mut()?;
        if surface.is_fullscreen() {
            surface.set_fullscreen(false);
        }
        let bounds = surface.bounds().with_size(width, height);
        surface.set_bounds(bounds).map_err(|e| {
            tracing::warn!(width, height, error = %e, "Primary resize failed");
            CommandError::Resize
        })
    }

    pub fn capture_primary(&self) -> Result<RgbaSnapshot, CommandError> {
        let primary = self.primary.as_ref().ok_or(CommandError::PrimaryUnavailable)?;
        primary.surface.capture().map_err(|e| {
            tracing::warn!(error = %e, "Primary capture failed");
            CommandError::Screenshot
        })
    }

    // =========================================================================
    // SECONDARIES
    // =========================================================================

    pub fn registry(&self) -> &SurfaceRegistry<S> {
        &self.secondaries
    }

    pub fn registry_mut(&mut self) -> &mut SurfaceRegistry<S> {
        &mut self.secondaries
    }

    /// Spawn a secondary surface parented to the primary.
    pub fn open_window<F>(&mut self, factory: &mut F, spec: &SurfaceSpec) -> Result<SurfaceHandle, CommandError>
    where
        F: SurfaceFactory<Surface = S>,
    {
        if self.primary.is_none() {
            return Err(CommandError::PrimaryUnavailable);
        }
        self.secondaries.open(factory, spec).map_err(|e| {
            tracing::warn!(url = %spec.url, error = %e, "Secondary surface creation failed");
            CommandError::OpenWindow
        })
    }

    pub fn close_window(&mut self, handle: SurfaceHandle) -> Result<(), CommandError> {
        self.secondaries.close(handle)
    }

    /// The toolkit reported `id` closed. Returns `true` when no surface is
    /// left afterwards.
    ///
    /// Secondary surfaces are children of the primary, so the primary
    /// closing takes them with it.
    pub fn surface_closed(&mut self, id: SurfaceId) -> bool {
        match id {
            SurfaceId::Primary => {
                if self.primary.take().is_some() {
                    tracing::info!("Primary surface closed");
                }
                self.secondaries.close_all();
            }
            SurfaceId::Secondary(handle) => {
                self.secondaries.on_closed(handle);
            }
        }
        self.surface_count() == 0
    }

    pub fn surface_count(&self) -> usize {
        usize::from(self.primary.is_some()) + self.secondaries.len()
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Close every secondary and drop the primary.
    pub fn teardown(&mut self) {
        let secondaries = self.secondaries.len();
        self.secondaries.close_all();
        if let Some(mut primary) = self.primary.take() {
            primary.surface.close();
        }
        tracing::info!(secondaries, "Host state torn down");
    }

    /// Apply one request and answer it.
    pub fn serve<F>(&mut self, request: HostRequest, factory: &mut F)
    where
        F: SurfaceFactory<Surface = S>,
    {
        tracing::trace!(request = request.kind(), "Serving host request");
        match request {
            HostRequest::ToggleFullscreen(respond) => {
                let _ = respond.send(self.toggle_fullscreen());
            }
            HostRequest::Resize {
                width,
                height,
                respond,
            } => {
                let _ = respond.send(self.resize(width, height));
            }
            HostRequest::CapturePrimary(respond) => {
                let _ = respond.send(self.capture_primary());
            }
            HostRequest::OpenWindow { spec, respond } => {
                let _ = respond.send(self.open_window(factory, &spec));
            }
            HostRequest::CloseWindow { handle, respond } => {
                let _ = respond.send(self.close_window(handle));
            }
            HostRequest::Quit(respond) => {
                self.request_quit();
                let _ = respond.send(Ok(()));
            }
        }
    }
}

#[cfg(test)]
mod tests;
