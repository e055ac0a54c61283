//! Screenshot output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenshotConfig {
    /// Output directory. Unset means the user's pictures directory.
    pub directory: Option<PathBuf>,
}
