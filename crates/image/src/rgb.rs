use crate::{pixelformat::chroma_stride, *};
use base::Vec2;

fn ensure_len(format: PixelFormat, size: Vec2<usize>, data: &[u8]) -> Result<(), ImageError> {
    if let Some(expected) = format.frame_len(size) {
        if data.len() < expected {
            return Err(ImageError::Size {
                expected,
                actual: data.len(),
            });
        }
    }
    Ok(())
}

pub(crate) fn ensure_frame(image: &Image) -> Result<(), ImageError> {
    ensure_len(image.format, image.size, &image.data)
}

pub fn nv21_to_rgb(size: Vec2<usize>, data: &[u8]) -> Result<Vec<u8>, ImageError> {
    ensure_len(PixelFormat::Nv21, size, data)?;

    let width = size.x;
    let y_len = size.area();
    let stride = chroma_stride(width);

    let y_plane = &data[..y_len];
    let vu_plane = &data[y_len..];

    let mut rgb = Vec::with_capacity(y_len * 3);

    for row in 0..size.y {
        for col in 0..width {
            let y = y_plane[row * width + col];
            let vu = (row / 2) * stride + (col / 2) * 2;
            let (r, g, b) = yuv_to_rgb(y, vu_plane[vu + 1], vu_plane[vu]);
            rgb.extend_from_slice(&[r, g, b]);
        }
    }

    Ok(rgb)
}

/// Decode a PNG payload into an `Rgb8` image, dropping any alpha channel.
pub fn png_to_rgb(image: &Image) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Png)?;
    let decoded =
        crates_image::load_from_memory_with_format(&image.data, crates_image::ImageFormat::Png)
            .map_err(|e| ImageError::Decode(format!("Failed to decode PNG: {}", e)))?;

    let rgb_image = decoded.to_rgb8();
    let (width, height) = rgb_image.dimensions();
    let size = Vec2::new(width as usize, height as usize);

    Ok(Image::new(size, rgb_image.into_raw(), PixelFormat::Rgb8))
}
