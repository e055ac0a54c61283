use std::io::Cursor;

use shellhost_common::PlatformError;

use super::RgbaSnapshot;

/// Encode an RGBA snapshot as a PNG byte buffer.
pub fn encode_png(snapshot: &RgbaSnapshot) -> Result<Vec<u8>, PlatformError> {
    if !snapshot.is_well_formed() {
        return Err(PlatformError::EncodeError(format!(
            "buffer of {} bytes does not match {}x{} RGBA",
            snapshot.pixels.len(),
            snapshot.width,
            snapshot.height
        )));
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, snapshot.width, snapshot.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| PlatformError::EncodeError(e.to_string()))?;
        writer
            .write_image_data(&snapshot.pixels)
            .map_err(|e| PlatformError::EncodeError(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
