//! `take-screenshot`: capture the primary surface and write it as PNG.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Value};
use shellhost_common::ShellError;
use shellhost_platform::{encode_png, RgbaSnapshot};

use crate::dispatcher::{HandlerResult, Invocation};
use crate::error::CommandError;
use crate::host::HostClient;

/// Base name for a screenshot.
///
/// Missing, null or blank names are synthesized from the current time.
/// A trailing `.png` is dropped so the reply never doubles the extension.
/// Names that could escape the screenshot directory are rejected.
pub fn screenshot_name(raw: Option<&Value>) -> Result<String, CommandError> {
    let name = match raw {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => {
            return Err(CommandError::invalid(
                "filename",
                format!("expected a string, got {other}"),
            ))
        }
    };

    let name = if name.to_ascii_lowercase().ends_with(".png") {
        name[..name.len() - 4].to_string()
    } else {
        name
    };

    if name.is_empty() {
        return Ok(format!("screenshot-{}", chrono::Utc::now().timestamp_millis()));
    }

    if name.contains(['/', '\\', '\0']) || name.contains("..") {
        return Err(CommandError::invalid("filename", "must be a plain file name"));
    }
    Ok(name)
}

/// Encode `snapshot` and write it to `<dir>/<name>.png`.
pub async fn write_screenshot(
    dir: &Path,
    name: &str,
    snapshot: RgbaSnapshot,
) -> Result<PathBuf, ShellError> {
    let bytes = tokio::task::spawn_blocking(move || encode_png(&snapshot))
        .await
        .map_err(|e| ShellError::Other(format!("encoder task failed: {e}")))??;

    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(format!("{name}.png"));
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

pub(super) async fn take_screenshot(
    host: HostClient,
    dir: Arc<PathBuf>,
    inv: Invocation,
) -> HandlerResult {
    let name = screenshot_name(inv.arg(0))?;
    let snapshot = host.capture_primary().await.map_err(|e| {
        tracing::warn!(error = %e, "Screenshot capture failed");
        CommandError::Screenshot
    })?;

    match write_screenshot(&dir, &name, snapshot).await {
        Ok(path) => {
            tracing::info!(path = %path.display(), "Screenshot saved");
            Ok(Some(json!(format!("{name}.png"))))
        }
        Err(e) => {
            tracing::warn!(dir = %dir.display(), name = %name, error = %e, "Screenshot write failed");
            Err(CommandError::Screenshot)
        }
    }
}
