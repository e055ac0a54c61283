//! Requests from command handlers to the thread that owns [`HostState`].
//!
//! [`HostState`]: super::HostState

use std::fmt;
use std::sync::Arc;

use shellhost_platform::RgbaSnapshot;
use tokio::sync::{mpsc, oneshot};

use crate::error::CommandError;
use crate::surface::{SurfaceHandle, SurfaceSpec};

pub type Responder<T> = oneshot::Sender<Result<T, CommandError>>;

/// One host-state operation plus where to send its result.
pub enum HostRequest {
    /// Flip the primary surface's fullscreen state. Responds with the new state.
    ToggleFullscreen(Responder<bool>),
    Resize {
        width: u32,
        height: u32,
        respond: Responder<()>,
    },
    CapturePrimary(Responder<RgbaSnapshot>),
    OpenWindow {
        spec: SurfaceSpec,
        respond: Responder<SurfaceHandle>,
    },
    CloseWindow {
        handle: SurfaceHandle,
        respond: Responder<()>,
    },
    Quit(Responder<()>),
}

impl HostRequest {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ToggleFullscreen(_) => "toggle_fullscreen",
            Self::Resize { .. } => "resize",
            Self::CapturePrimary(_) => "capture_primary",
            Self::OpenWindow { .. } => "open_window",
            Self::CloseWindow { .. } => "close_window",
            Self::Quit(_) => "quit",
        }
    }
}

impl fmt::Debug for HostRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resize { width, height, .. } => f
                .debug_struct("Resize")
                .field("width", width)
                .field("height", height)
                .finish_non_exhaustive(),
            Self::OpenWindow { spec, .. } => f
                .debug_struct("OpenWindow")
                .field("spec", spec)
                .finish_non_exhaustive(),
            Self::CloseWindow { handle, .. } => f
                .debug_struct("CloseWindow")
                .field("handle", handle)
                .finish_non_exhaustive(),
            other => f.write_str(other.kind()),
        }
    }
}

type PostFn = Arc<dyn Fn(HostRequest) -> bool + Send + Sync>;

/// Cloneable sender of [`HostRequest`]s.
///
/// The binary posts through its event-loop proxy; tests post into an mpsc
/// channel. Either way the request is served on one thread, and a request
/// that cannot be delivered or is never answered resolves to
/// [`CommandError::HostUnavailable`].
#[derive(Clone)]
pub struct HostClient {
    post: PostFn,
}

impl fmt::Debug for HostClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostClient").finish_non_exhaustive()
    }
}

impl HostClient {
    /// Build from a posting function returning whether delivery succeeded.
    pub fn new<F>(post: F) -> Self
    where
        F: Fn(HostRequest) -> bool + Send + Sync + 'static,
    {
        Self { post: Arc::new(post) }
    }

    pub fn from_channel(tx: mpsc::UnboundedSender<HostRequest>) -> Self {
        Self::new(move |request| tx.send(request).is_ok())
    }

    async fn request<T>(&self, build: impl FnOnce(Responder<T>) -> HostRequest) -> Result<T, CommandError> {
        let (tx, rx) = oneshot::channel();
        if !(self.post)(build(tx)) {
            return Err(CommandError::HostUnavailable);
        }
        rx.await.map_err(|_| CommandError::HostUnavailable)?
    }

    pub async fn toggle_fullscreen(&self) -> Result<bool, CommandError> {
        self.request(HostRequest::ToggleFullscreen).await
    }

    pub async fn resize(&self, width: u32, height: u32) -> Result<(), CommandError> {
        self.request(|respond| HostRequest::Resize {
            width,
            height,
            respond,
        })
        .await
    }

    pub async fn capture_primary(&self) -> Result<RgbaSnapshot, CommandError> {
        self.request(HostRequest::CapturePrimary).await
    }

    pub async fn open_window(&self, spec: SurfaceSpec) -> Result<SurfaceHandle, CommandError> {
        self.request(|respond| HostRequest::OpenWindow { spec, respond })
            .await
    }

    pub async fn close_window(&self, handle: SurfaceHandle) -> Result<(), CommandError> {
        self.request(|respond| HostRequest::CloseWindow { handle, respond })
            .await
    }

    pub async fn quit(&self) -> Result<(), CommandError> {
        self.request(HostRequest::Quit).await
    }
}
