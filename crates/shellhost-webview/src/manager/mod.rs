//! WebView lifecycle management.
//!
//! `WebViewManager` builds one `wry::WebView` per surface and collects the
//! events they raise. The event loop drains the queue on every poll.

use std::sync::{Arc, Mutex};

use shellhost_common::Bounds;

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Webview factory plus the shared event sink.
pub struct WebViewManager {
    /// Event sink: handlers push here, the main event loop drains it.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    #[cfg(test)]
    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert surface-relative `Bounds` (logical pixels) to a wry `Rect`.
pub fn bounds_to_wry(bounds: Bounds) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
            f64::from(bounds.x),
            f64::from(bounds.y),
        )),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            f64::from(bounds.width),
            f64::from(bounds.height),
        )),
    }
}

#[cfg(test)]
mod tests {
    use shellhost_bridge::SurfaceId;

    use super::*;

    #[test]
    fn bounds_convert_to_logical_rect() {
        let rect = bounds_to_wry(Bounds::new(0, 0, 800, 600));
        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 800.0).abs() < f64::EPSILON);
                assert!((size.height - 600.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
        match rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!(pos.x.abs() < f64::EPSILON);
                assert!(pos.y.abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
    }

    #[test]
    fn drain_empties_queue() {
        let manager = WebViewManager::new();
        manager.push_event(WebViewEvent::TitleChanged {
            surface: SurfaceId::Primary,
            title: "Home".into(),
        });
        let drained = manager.drain_events();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].surface(), SurfaceId::Primary);
        assert!(manager.drain_events().is_empty());
    }
}
