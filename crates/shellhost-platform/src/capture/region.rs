use screenshots::Screen;
use shellhost_common::{Bounds, PlatformError};
use tracing::debug;

use super::RgbaSnapshot;

/// Capture the on-screen rectangle `bounds` (global logical coordinates).
///
/// The display is chosen by the rectangle's top-left corner; anything
/// that spills onto a neighbouring display is clipped.
pub fn capture_region(bounds: Bounds) -> Result<RgbaSnapshot, PlatformError> {
    if bounds.is_empty() {
        return Err(PlatformError::CaptureError("empty capture region".into()));
    }

    let screen = Screen::from_point(bounds.x, bounds.y).map_err(|e| {
        PlatformError::CaptureError(format!(
            "no screen at ({}, {}): {e}",
            bounds.x, bounds.y
        ))
    })?;

    let info = screen.display_info;
    let rel_x = bounds.x - info.x;
    let rel_y = bounds.y - info.y;
    let width = bounds.width.min(info.width.saturating_sub(rel_x.max(0) as u32));
    let height = bounds.height.min(info.height.saturating_sub(rel_y.max(0) as u32));

    debug!(
        display = info.id,
        rel_x, rel_y, width, height, "capturing screen region"
    );

    let image = screen
        .capture_area(rel_x, rel_y, width, height)
        .map_err(|e| PlatformError::CaptureError(e.to_string()))?;

    Ok(RgbaSnapshot::new(image.width(), image.height(), image.into_raw()))
}
