//! WebView event types.

use serde::{Deserialize, Serialize};
use shellhost_bridge::SurfaceId;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has finished loading, successfully or onto an error page.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a webview, queued for the event loop.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Main-frame load state changed. Carries the URL.
    PageLoad {
        surface: SurfaceId,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        surface: SurfaceId,
        title: String,
    },
    /// A JSON message posted through `window.ipc.postMessage`.
    IpcMessage {
        surface: SurfaceId,
        body: String,
    },
    /// A navigation outside the surface's scope was refused.
    NavigationBlocked {
        surface: SurfaceId,
        url: String,
    },
}

impl WebViewEvent {
    pub fn surface(&self) -> SurfaceId {
        match self {
            Self::PageLoad { surface, .. }
            | Self::TitleChanged { surface, .. }
            | Self::IpcMessage { surface, .. }
            | Self::NavigationBlocked { surface, .. } => *surface,
        }
    }
}
