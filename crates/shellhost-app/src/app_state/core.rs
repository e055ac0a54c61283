//! ShellApp struct definition and constructor.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use shellhost_bridge::{builtin_dispatcher, CommandDispatcher, HostClient, HostState, RetryLoader, SurfaceId};
use shellhost_config::ShellConfig;
use shellhost_webview::WebViewManager;
use winit::event_loop::EventLoopProxy;
use winit::window::WindowId;

use super::surface::WindowSurface;
use super::types::ShellEvent;

/// Top-level application state.
pub struct ShellApp {
    pub(super) config: ShellConfig,
    pub(super) proxy: EventLoopProxy<ShellEvent>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Command bridge
    pub(super) dispatcher: Arc<CommandDispatcher>,

    // Surfaces
    pub(super) host: HostState<WindowSurface>,
    pub(super) webviews: WebViewManager,
    pub(super) windows: HashMap<WindowId, SurfaceId>,

    // Primary content loading
    pub(super) loader: Option<RetryLoader>,
    pub(super) http: reqwest::Client,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl ShellApp {
    pub fn new(
        config: ShellConfig,
        proxy: EventLoopProxy<ShellEvent>,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        let screenshot_dir = screenshot_dir(&config);
        tracing::info!(dir = %screenshot_dir.display(), "Screenshots directory");

        let host_proxy = Mutex::new(proxy.clone());
        let host_client = HostClient::new(move |request| {
            host_proxy
                .lock()
                .map(|p| p.send_event(ShellEvent::Host(request)).is_ok())
                .unwrap_or(false)
        });

        Self {
            config,
            proxy,
            tokio_runtime: Some(runtime),
            dispatcher: Arc::new(builtin_dispatcher(host_client, screenshot_dir)),
            host: HostState::new(),
            webviews: WebViewManager::new(),
            windows: HashMap::new(),
            loader: None,
            http: reqwest::Client::new(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}

fn screenshot_dir(config: &ShellConfig) -> PathBuf {
    shellhost_platform::resolve_screenshot_dir(config.screenshots.directory.as_deref())
        .unwrap_or_else(|e| {
            tracing::warn!("No screenshot directory available, using working directory: {e}");
            PathBuf::from("screenshots")
        })
}
