//! `Surface` implementation over a winit window with a wry child webview.

use std::sync::Arc;

use shellhost_bridge::{Surface, SurfaceError};
use shellhost_common::Bounds;
use shellhost_platform::{capture_region, RgbaSnapshot};
use shellhost_webview::{target_url, WebViewHandle};
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::window::{Fullscreen, Window};

pub struct WindowSurface {
    pub(super) window: Arc<Window>,
    pub(super) webview: WebViewHandle,
}

impl WindowSurface {
    pub(super) fn webview(&self) -> &WebViewHandle {
        &self.webview
    }

    pub(super) fn webview_mut(&mut self) -> &mut WebViewHandle {
        &mut self.webview
    }

    /// Stretch the webview over the window's current client area.
    pub(super) fn sync_webview_bounds(&self) {
        let size = self
            .window
            .inner_size()
            .to_logical::<u32>(self.window.scale_factor());
        if size.width == 0 || size.height == 0 {
            return;
        }
        if let Err(e) = self.webview.fill(size.width, size.height) {
            tracing::warn!(surface = %self.webview.surface(), error = %e, "Failed to sync webview bounds");
        }
    }

    /// Client area in global logical coordinates.
    fn client_bounds(&self) -> Result<Bounds, SurfaceError> {
        let scale = self.window.scale_factor();
        let origin: LogicalPosition<i32> = self
            .window
            .inner_position()
            .map_err(|e| SurfaceError::Capture(e.to_string()))?
            .to_logical(scale);
        let size: LogicalSize<u32> = self.window.inner_size().to_logical(scale);
        Ok(Bounds::new(origin.x, origin.y, size.width, size.height))
    }
}

impl Surface for WindowSurface {
    fn bounds(&self) -> Bounds {
        let scale = self.window.scale_factor();
        let size: LogicalSize<u32> = self.window.inner_size().to_logical(scale);
        let origin: LogicalPosition<i32> = self
            .window
            .outer_position()
            .map(|p| p.to_logical(scale))
            .unwrap_or(LogicalPosition::new(0, 0));
        Bounds::new(origin.x, origin.y, size.width, size.height)
    }

    fn set_bounds(&mut self, bounds: Bounds) -> Result<(), SurfaceError> {
        if bounds.is_empty() {
            return Err(SurfaceError::Resize(format!(
                "empty size {}x{}",
                bounds.width, bounds.height
            )));
        }
        // `None` means the resize is applied asynchronously; the webview
        // follows on the `Resized` event.
        if let Some(size) = self
            .window
            .request_inner_size(LogicalSize::new(bounds.width, bounds.height))
        {
            tracing::debug!(width = size.width, height = size.height, "Window resized");
        }
        self.window
            .set_outer_position(LogicalPosition::new(bounds.x, bounds.y));
        self.sync_webview_bounds();
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.window
            .set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
    }

    fn load(&mut self, target: &str) -> Result<(), SurfaceError> {
        self.webview
            .load_url(&target_url(target))
            .map_err(|e| SurfaceError::Load(e.to_string()))
    }

    fn capture(&self) -> Result<RgbaSnapshot, SurfaceError> {
        if !self.window.is_visible().unwrap_or(true) || self.window.is_minimized().unwrap_or(false) {
            return Err(SurfaceError::Capture("window is not on screen".into()));
        }
        let bounds = self.client_bounds()?;
        capture_region(bounds).map_err(|e| SurfaceError::Capture(e.to_string()))
    }

    fn close(&mut self) {
        if let Err(e) = self.webview.set_visible(false) {
            tracing::debug!(error = %e, "Failed to hide webview");
        }
        self.window.set_visible(false);
    }
}
