use std::sync::Arc;

use shellhost_bridge::ipc::{csp_init_script, BRIDGE_INIT_SCRIPT};
use shellhost_bridge::SurfaceId;
use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a webview filling `window`.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// Every webview gets the bridge stub and the content security policy
    /// before any page script runs.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        surface: SurfaceId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);
        let posture = config.posture;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(posture.devtools)
            .with_clipboard(posture.privileged_apis)
            .with_incognito(posture.sandbox)
            .with_autoplay(false)
            .with_focused(true)
            .with_user_agent(&config.user_agent)
            .with_initialization_script(BRIDGE_INIT_SCRIPT)
            .with_initialization_script(&csp_init_script(posture.content_security_policy));

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), surface);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), surface);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), surface);
        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(&events),
            surface,
            config.scope,
            posture.web_security,
        );

        let initial_url = config
            .initial_url
            .unwrap_or_else(|| "about:blank".to_string());
        builder = builder.with_url(&initial_url);

        let webview = builder.build_as_child(window)?;

        debug!(%surface, url = %initial_url, "WebView created");

        Ok(WebViewHandle {
            webview,
            surface,
            current_url: initial_url,
            current_title: String::new(),
        })
    }
}
