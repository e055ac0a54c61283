//! Display surface abstraction.
//!
//! The windowing toolkit is consumed through [`Surface`] and
//! [`SurfaceFactory`]; everything above this module is toolkit-agnostic.

use std::fmt;

use serde::{Deserialize, Serialize};
use shellhost_common::Bounds;
use shellhost_platform::RgbaSnapshot;

/// Opaque, process-unique identifier for a secondary surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceHandle(u64);

impl SurfaceHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which surface something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    Primary,
    Secondary(SurfaceHandle),
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Secondary(handle) => write!(f, "window-{handle}"),
        }
    }
}

/// Content-execution posture applied to a surface.
///
/// There is exactly one posture, [`SecurityPosture::HARDENED`]; it is not
/// part of [`SurfaceSpec`] so callers cannot weaken it per surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityPosture {
    pub sandbox: bool,
    /// Host APIs beyond the fixed command bridge.
    pub privileged_apis: bool,
    /// Same-origin enforcement and navigation restriction.
    pub web_security: bool,
    pub devtools: bool,
    pub content_security_policy: &'static str,
}

impl SecurityPosture {
    pub const HARDENED: Self = Self {
        sandbox: true,
        privileged_apis: false,
        web_security: true,
        devtools: false,
        content_security_policy: "default-src 'self'; script-src 'self'",
    };
}

/// What to create: load target, geometry and window mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSpec {
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// `None` lets the toolkit place the surface.
    pub position: Option<(i32, i32)>,
    pub fullscreen: bool,
}

impl SurfaceSpec {
    pub fn primary(
        url: impl Into<String>,
        width: u32,
        height: u32,
        position: Option<(i32, i32)>,
        fullscreen: bool,
    ) -> Self {
        Self {
            url: url.into(),
            width,
            height,
            position,
            fullscreen,
        }
    }

    /// Secondary surfaces are always windowed and always explicitly placed.
    pub fn secondary(url: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            url: url.into(),
            width: bounds.width,
            height: bounds.height,
            position: Some((bounds.x, bounds.y)),
            fullscreen: false,
        }
    }

    pub fn posture(&self) -> SecurityPosture {
        SecurityPosture::HARDENED
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface creation failed: {0}")]
    Create(String),

    #[error("load failed: {0}")]
    Load(String),

    #[error("resize failed: {0}")]
    Resize(String),

    #[error("capture failed: {0}")]
    Capture(String),
}

/// A live display surface.
pub trait Surface {
    fn bounds(&self) -> Bounds;
    fn set_bounds(&mut self, bounds: Bounds) -> Result<(), SurfaceError>;
    fn is_fullscreen(&self) -> bool;
    fn set_fullscreen(&mut self, fullscreen: bool);
    /// Navigate to `target`.
    fn load(&mut self, target: &str) -> Result<(), SurfaceError>;
    /// Grab the surface's current pixels.
    fn capture(&self) -> Result<RgbaSnapshot, SurfaceError>;
    /// Request destruction. The surface is gone once dropped.
    fn close(&mut self);
}

/// Creates surfaces with the hardened posture.
pub trait SurfaceFactory {
    type Surface: Surface;

    fn create(&mut self, id: SurfaceId, spec: &SurfaceSpec) -> Result<Self::Surface, SurfaceError>;
}
