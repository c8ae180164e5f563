use crate::*;
use base::Vec2;

/// Width in pixels of each stripe in the test pattern.
pub const STRIPE_WIDTH: usize = 20;

// side length of the embedded sample image
const SAMPLE_SIZE: usize = 8;

static SAMPLE_FRAME_PNG: &[u8] = include_bytes!("../assets/sample_frame.png");

/// The embedded placeholder frame: a small PNG with a white outline on black.
pub fn sample_frame() -> Image {
    Image::new(
        Vec2::new(SAMPLE_SIZE, SAMPLE_SIZE),
        SAMPLE_FRAME_PNG,
        PixelFormat::Png,
    )
}

/// Mock camera output: alternating white and black vertical stripes in NV21,
/// chroma planes neutral.
pub fn stripe_pattern(size: Vec2<usize>) -> Image {
    let y_len = size.area();
    let total = PixelFormat::Nv21.frame_len(size).unwrap_or(y_len);
    let mut data = vec![128u8; total];

    for row in 0..size.y {
        for col in 0..size.x {
            data[row * size.x + col] = if (col / STRIPE_WIDTH) % 2 == 0 { 255 } else { 0 };
        }
    }

    Image::new(size, data, PixelFormat::Nv21)
}
