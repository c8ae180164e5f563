use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Packed 8-bit RGB, three bytes per pixel.
    Rgb8,
    /// Full-resolution Y plane followed by interleaved V/U at quarter resolution.
    Nv21,
    /// Encoded PNG file.
    Png,
}

impl PixelFormat {
    /// Bytes a raw frame of `size` occupies, `None` for encoded formats.
    pub fn frame_len(&self, size: base::Vec2<usize>) -> Option<usize> {
        match self {
            PixelFormat::Rgb8 => Some(size.area() * 3),
            PixelFormat::Nv21 => Some(size.area() + chroma_stride(size.x) * size.y.div_ceil(2)),
            PixelFormat::Png => None,
        }
    }

    pub fn ensure_format(&self, expected: PixelFormat) -> Result<(), ImageError> {
        if *self != expected {
            return Err(ImageError::Decode(format!(
                "expected {:?} format, got {:?}",
                expected, self
            )));
        }
        Ok(())
    }
}

// bytes per interleaved V/U row; odd widths round up to a whole pair
pub(crate) fn chroma_stride(width: usize) -> usize {
    width.div_ceil(2) * 2
}

// BT.601 YUV-to-RGB conversion for a single pixel (fixed-point, shift 8)
pub(crate) fn yuv_to_rgb(y: u8, u: u8, v: u8) -> (u8, u8, u8) {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    (r, g, b)
}
