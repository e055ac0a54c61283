//! Secondary surfaces keyed by opaque handle.
//!
//! The registry is the single owner of every secondary surface. A handle
//! leaves the map exactly once, whether through [`SurfaceRegistry::close`]
//! or through the toolkit's closed notification ([`SurfaceRegistry::on_closed`]);
//! whichever runs second finds nothing and does nothing.

use std::collections::HashMap;

use shellhost_common::Bounds;

use crate::error::CommandError;
use crate::surface::{Surface, SurfaceError, SurfaceFactory, SurfaceHandle, SurfaceId, SurfaceSpec};

/// A spawned surface and what it was spawned with.
#[derive(Debug)]
pub struct SecondarySurface<S> {
    pub handle: SurfaceHandle,
    /// Always [`SurfaceId::Primary`].
    pub parent: SurfaceId,
    pub url: String,
    surface: S,
}

impl<S: Surface> SecondarySurface<S> {
    pub fn bounds(&self) -> Bounds {
        self.surface.bounds()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[derive(Debug)]
pub struct SurfaceRegistry<S> {
    surfaces: HashMap<SurfaceHandle, SecondarySurface<S>>,
    next_handle: u64,
}

impl<S> Default for SurfaceRegistry<S> {
    fn default() -> Self {
        Self {
            surfaces: HashMap::new(),
            next_handle: 0,
        }
    }
}

impl<S: Surface> SurfaceRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface through `factory` and register it.
    ///
    /// Handles start at 1 and are never reused, even when creation fails.
    pub fn open<F>(&mut self, factory: &mut F, spec: &SurfaceSpec) -> Result<SurfaceHandle, SurfaceError>
    where
        F: SurfaceFactory<Surface = S>,
    {
        self.next_handle += 1;
        let handle = SurfaceHandle::new(self.next_handle);
        let surface = factory.create(SurfaceId::Secondary(handle), spec)?;

        tracing::info!(%handle, url = %spec.url, "Secondary surface opened");
        self.surfaces.insert(
            handle,
            SecondarySurface {
                handle,
                parent: SurfaceId::Primary,
                url: spec.url.clone(),
                surface,
            },
        );
        Ok(handle)
    }

    pub fn get(&self, handle: SurfaceHandle) -> Option<&SecondarySurface<S>> {
        self.surfaces.get(&handle)
    }

    pub fn get_mut(&mut self, handle: SurfaceHandle) -> Option<&mut SecondarySurface<S>> {
        self.surfaces.get_mut(&handle)
    }

    /// Remove `handle` and ask its surface to go away.
    pub fn close(&mut self, handle: SurfaceHandle) -> Result<(), CommandError> {
        let mut entry = self
            .surfaces
            .remove(&handle)
            .ok_or_else(|| CommandError::UnknownWindowHandle(handle.to_string()))?;
        entry.surface.close();
        tracing::info!(%handle, "Secondary surface closed");
        Ok(())
    }

    /// The surface reported itself closed. Returns whether an entry was
    /// removed; an already-removed handle is a no-op.
    pub fn on_closed(&mut self, handle: SurfaceHandle) -> bool {
        match self.surfaces.remove(&handle) {
            Some(_) => {
                tracing::debug!(%handle, "Secondary surface closed by user");
                true
            }
            None => false,
        }
    }

    /// Close every secondary surface.
    pub fn close_all(&mut self) {
        for (_, mut entry) in self.surfaces.drain() {
            entry.surface.close();
        }
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Live handles, ascending.
    pub fn handles(&self) -> Vec<SurfaceHandle> {
        let mut handles: Vec<_> = self.surfaces.keys().copied().collect();
        handles.sort_unstable();
        handles
    }
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::testing::MockFactory;
    use super::*;

    fn spec() -> SurfaceSpec {
        SurfaceSpec::secondary("https://a.test/", Bounds::new(10, 10, 640, 480))
    }

    #[test]
    fn open_assigns_monotonic_handles_from_one() {
        let mut factory = MockFactory::default();
        let mut registry = SurfaceRegistry::new();
        let a = registry.open(&mut factory, &spec()).unwrap();
        let b = registry.open(&mut factory, &spec()).unwrap();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(registry.handles(), vec![a, b]);
        assert_eq!(factory.created, vec![SurfaceId::Secondary(a), SurfaceId::Secondary(b)]);
    }

    #[test]
    fn opened_surface_is_parented_and_placed() {
        let mut factory = MockFactory::default();
        let mut registry = SurfaceRegistry::new();
        let h = registry.open(&mut factory, &spec()).unwrap();
        let entry = registry.get(h).unwrap();
        assert_eq!(entry.parent, SurfaceId::Primary);
        assert_eq!(entry.url, "https://a.test/");
        assert_eq!(entry.bounds(), Bounds::new(10, 10, 640, 480));
    }

    #[test]
    fn failed_creation_registers_nothing_and_burns_handle() {
        let mut factory = MockFactory {
            fail_next: true,
            ..Default::default()
        };
        let mut registry = SurfaceRegistry::new();
        assert!(registry.open(&mut factory, &spec()).is_err());
        assert!(registry.is_empty());
        let h = registry.open(&mut factory, &spec()).unwrap();
        assert_eq!(h.get(), 2);
    }

    #[test]
    fn close_then_close_again_reports_unknown_handle() {
        let mut factory = MockFactory::default();
        let mut registry = SurfaceRegistry::new();
        let h = registry.open(&mut factory, &spec()).unwrap();

        registry.close(h).unwrap();
        assert!(registry.get(h).is_none());
        assert_eq!(factory.closes.load(Ordering::SeqCst), 1);

        let err = registry.close(h).unwrap_err();
        assert_eq!(err.to_string(), format!("Unknown window handle {h}"));
        assert_eq!(factory.closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn command_close_and_closed_notification_remove_once() {
        let mut factory = MockFactory::default();
        let mut registry = SurfaceRegistry::new();
        let keep = registry.open(&mut factory, &spec()).unwrap();
        let h = registry.open(&mut factory, &spec()).unwrap();

        registry.close(h).unwrap();
        assert!(!registry.on_closed(h));
        assert_eq!(registry.handles(), vec![keep]);
    }

    #[test]
    fn closed_notification_before_command() {
        let mut factory = MockFactory::default();
        let mut registry = SurfaceRegistry::new();
        let h = registry.open(&mut factory, &spec()).unwrap();

        assert!(registry.on_closed(h));
        assert!(!registry.on_closed(h));
        assert!(registry.close(h).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn close_all_empties_registry() {
        let mut factory = MockFactory::default();
        let mut registry = SurfaceRegistry::new();
        for _ in 0..3 {
            registry.open(&mut factory, &spec()).unwrap();
        }
        registry.close_all();
        assert_eq!(registry.len(), 0);
        assert_eq!(factory.closes.load(Ordering::SeqCst), 3);
    }
}
