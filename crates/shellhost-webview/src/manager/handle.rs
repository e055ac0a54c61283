use shellhost_bridge::ipc::settle_script;
use shellhost_bridge::{CommandEnvelope, SurfaceId};
use shellhost_common::Bounds;
use wry::WebView;

use super::bounds_to_wry;

/// A live webview and what it is showing.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) surface: SurfaceId,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    pub(super) current_title: String,
}

impl WebViewHandle {
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.current_url = url.to_string();
        self.webview.load_url(url)
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Answer bridge request `id` from document `doc` with `envelope`.
    pub fn settle(&self, doc: &str, id: u64, envelope: &CommandEnvelope) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&settle_script(doc, id, envelope))
    }

    /// Fill the parent window's client area.
    pub fn fill(&self, width: u32, height: u32) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds_to_wry(Bounds::new(0, 0, width, height)))
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }

    /// Track a URL reported by the page-load handler.
    pub fn set_current_url(&mut self, url: String) {
        self.current_url = url;
    }
}
