//! Window-management handlers.

use serde_json::json;
use shellhost_common::Bounds;

use crate::dispatcher::{HandlerResult, Invocation};
use crate::host::HostClient;
use crate::surface::SurfaceSpec;

use super::DEFAULT_WINDOW_BOUNDS;

pub(super) async fn toggle_fullscreen(host: HostClient, _inv: Invocation) -> HandlerResult {
    host.toggle_fullscreen().await?;
    Ok(None)
}

pub(super) async fn resize(host: HostClient, inv: Invocation) -> HandlerResult {
    let width = inv.dimension(0, "width")?;
    let height = inv.dimension(1, "height")?;
    host.resize(width, height).await?;
    Ok(None)
}

pub(super) async fn open_window(host: HostClient, inv: Invocation) -> HandlerResult {
    let url = inv.string(0, "url")?.to_string();
    let d = DEFAULT_WINDOW_BOUNDS;
    let bounds = Bounds::new(
        inv.optional_coordinate(3, "x", d.x)?,
        inv.optional_coordinate(4, "y", d.y)?,
        inv.optional_dimension(1, "width", d.width)?,
        inv.optional_dimension(2, "height", d.height)?,
    );
    let handle = host.open_window(SurfaceSpec::secondary(url, bounds)).await?;
    Ok(Some(json!(handle)))
}

pub(super) async fn close_window(host: HostClient, inv: Invocation) -> HandlerResult {
    let handle = inv.handle(0, "handle")?;
    host.close_window(handle).await?;
    Ok(None)
}

pub(super) async fn close_app(host: HostClient, inv: Invocation) -> HandlerResult {
    tracing::info!(source = %inv.context.source, "Quit requested by content");
    host.quit().await?;
    Ok(None)
}
