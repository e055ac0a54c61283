//! Screen-region capture and PNG encoding.
//!
//! The windowing toolkit has no page-capture call, so a surface is captured
//! by grabbing its on-screen rectangle from the display it sits on.

mod encode;
mod region;

pub use encode::encode_png;
pub use region::capture_region;

/// Raw 8-bit RGBA pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaSnapshot {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaSnapshot {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A snapshot is well-formed when the buffer holds exactly
    /// `width * height` pixels.
    pub fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.pixels.len() as u64 == u64::from(self.width) * u64::from(self.height) * 4
    }
}
