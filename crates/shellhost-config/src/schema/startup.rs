//! Primary surface startup configuration.

use serde::{Deserialize, Serialize};
use shellhost_common::Bounds;

/// Content loaded into the primary surface when nothing else is configured.
pub const DEFAULT_START_URL: &str = "http://127.0.0.1:1010/";

/// Windowed size used when fullscreen is off but a dimension is unset.
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

/// Load target and geometry for the primary surface.
///
/// Geometry is optional. When all four of `width`, `height`, `x` and `y`
/// are unset the primary surface starts fullscreen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// URL or local path to display.
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_START_URL.into(),
            width: None,
            height: None,
            x: None,
            y: None,
        }
    }
}

impl StartupConfig {
    pub fn fullscreen(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.x.is_none() && self.y.is_none()
    }

    /// Windowed size, with defaults filled in.
    pub fn size(&self) -> (u32, u32) {
        (
            self.width.unwrap_or(DEFAULT_WINDOW_WIDTH),
            self.height.unwrap_or(DEFAULT_WINDOW_HEIGHT),
        )
    }

    /// Explicit position, if both coordinates were given.
    ///
    /// A single coordinate is not enough to place a window; the toolkit
    /// picks the position in that case.
    pub fn position(&self) -> Option<(i32, i32)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }

    /// Requested bounds, using the origin when no position was given.
    pub fn bounds(&self) -> Bounds {
        let (width, height) = self.size();
        let (x, y) = self.position().unwrap_or((0, 0));
        Bounds::new(x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_fullscreen_with_local_target() {
        let config = StartupConfig::default();
        assert_eq!(config.url, "http://127.0.0.1:1010/");
        assert!(config.fullscreen());
        assert_eq!(config.size(), (800, 600));
        assert_eq!(config.position(), None);
    }

    #[test]
    fn any_geometry_value_disables_fullscreen() {
        for config in [
            StartupConfig {
                width: Some(1),
                ..Default::default()
            },
            StartupConfig {
                height: Some(1),
                ..Default::default()
            },
            StartupConfig {
                x: Some(0),
                ..Default::default()
            },
            StartupConfig {
                y: Some(0),
                ..Default::default()
            },
        ] {
            assert!(!config.fullscreen(), "{config:?} should be windowed");
        }
    }

    #[test]
    fn size_fills_missing_dimension() {
        let config = StartupConfig {
            width: Some(1280),
            ..Default::default()
        };
        assert_eq!(config.size(), (1280, 600));
    }

    #[test]
    fn position_requires_both_coordinates() {
        let config = StartupConfig {
            x: Some(40),
            ..Default::default()
        };
        assert_eq!(config.position(), None);

        let config = StartupConfig {
            x: Some(40),
            y: Some(-20),
            ..Default::default()
        };
        assert_eq!(config.position(), Some((40, -20)));
        assert_eq!(config.bounds(), Bounds::new(40, -20, 800, 600));
    }
}
