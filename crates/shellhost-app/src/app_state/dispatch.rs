//! Webview event routing and bridge request dispatch.

use std::sync::Arc;

use shellhost_bridge::{BridgeRequest, CommandEnvelope, InvocationContext, SurfaceId};
use shellhost_webview::{PageLoadState, WebViewEvent};
use tracing::{debug, warn};

use super::core::ShellApp;
use super::types::ShellEvent;

impl ShellApp {
    /// Drain and handle everything the webviews reported since the last poll.
    pub(super) fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event {
                WebViewEvent::IpcMessage { surface, body } => {
                    self.handle_bridge_message(surface, &body);
                }
                WebViewEvent::PageLoad {
                    surface,
                    state: PageLoadState::Finished,
                    url,
                } => {
                    debug!(%surface, url = %url, "Page loaded");
                    if let Some(target) = self.surface_mut(surface) {
                        target.webview_mut().set_current_url(url.clone());
                    }
                    if surface == SurfaceId::Primary {
                        self.on_primary_page_load(&url);
                    }
                }
                WebViewEvent::PageLoad { .. } => {}
                WebViewEvent::TitleChanged { surface, title } => {
                    if let Some(target) = self.surface_mut(surface) {
                        target.window.set_title(&title);
                        target.webview_mut().set_title(title);
                    }
                }
                WebViewEvent::NavigationBlocked { surface, url } => {
                    debug!(%surface, url = %url, "Navigation outside content scope blocked");
                }
            }
        }
    }

    /// Run one bridge request on the runtime; the reply comes back as
    /// `ShellEvent::Reply`.
    fn handle_bridge_message(&self, surface: SurfaceId, body: &str) {
        let Some(request) = BridgeRequest::from_json(body) else {
            warn!(%surface, len = body.len(), "Malformed bridge request dropped");
            return;
        };
        let Some(rt) = &self.tokio_runtime else {
            return;
        };

        let dispatcher = Arc::clone(&self.dispatcher);
        let proxy = self.proxy.clone();
        rt.spawn(async move {
            let BridgeRequest { doc, id, command, args } = request;
            let context = InvocationContext::new(surface, id);
            let envelope = dispatcher.invoke(&command, context, args).await;
            if proxy
                .send_event(ShellEvent::Reply {
                    surface,
                    doc,
                    id,
                    envelope,
                })
                .is_err()
            {
                debug!(%surface, id, "Event loop closed before reply");
            }
        });
    }

    pub(super) fn deliver_reply(&self, surface: SurfaceId, doc: &str, id: u64, envelope: &CommandEnvelope) {
        let Some(target) = self.surface(surface) else {
            debug!(%surface, id, "Reply dropped, surface is gone");
            return;
        };
        if let Err(e) = target.webview().settle(doc, id, envelope) {
            warn!(%surface, id, error = %e, "Failed to deliver reply");
        }
    }
}
