//! Window + webview construction for `HostState`.

use std::collections::HashMap;
use std::sync::Arc;

use shellhost_bridge::{SurfaceError, SurfaceFactory, SurfaceId, SurfaceSpec};
use shellhost_common::Bounds;
use shellhost_webview::{bounds_to_wry, WebViewConfig, WebViewManager};
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes, WindowId};

use super::surface::WindowSurface;

/// Borrows what surface creation needs from `ShellApp` for one call.
pub(super) struct WindowFactory<'a> {
    pub event_loop: &'a ActiveEventLoop,
    pub webviews: &'a WebViewManager,
    pub windows: &'a mut HashMap<WindowId, SurfaceId>,
}

fn window_title(id: SurfaceId) -> String {
    match id {
        SurfaceId::Primary => "shellhost".to_string(),
        SurfaceId::Secondary(handle) => format!("shellhost (window {handle})"),
    }
}

impl SurfaceFactory for WindowFactory<'_> {
    type Surface = WindowSurface;

    fn create(&mut self, id: SurfaceId, spec: &SurfaceSpec) -> Result<WindowSurface, SurfaceError> {
        let mut attrs = WindowAttributes::default()
            .with_title(window_title(id))
            .with_inner_size(LogicalSize::new(spec.width, spec.height));
        if let Some((x, y)) = spec.position {
            attrs = attrs.with_position(LogicalPosition::new(x, y));
        }
        if spec.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = self
            .event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| SurfaceError::Create(e.to_string()))?;

        // The primary is loaded by the retry loader once its target answers;
        // secondaries load straight away.
        let load_now = matches!(id, SurfaceId::Secondary(_));
        let config = WebViewConfig::for_target(&spec.url, load_now);
        debug_assert_eq!(config.posture, spec.posture());

        let size: LogicalSize<u32> = window.inner_size().to_logical(window.scale_factor());
        let bounds = bounds_to_wry(Bounds::new(0, 0, size.width, size.height));
        let webview = self
            .webviews
            .create(id, window.as_ref(), bounds, config)
            .map_err(|e| SurfaceError::Create(e.to_string()))?;

        self.windows.insert(window.id(), id);
        tracing::debug!(surface = %id, window = ?window.id(), "Surface window created");
        Ok(WindowSurface { window, webview })
    }
}
