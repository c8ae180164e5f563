use crate::{rgb::ensure_frame, *};
use base::Vec2;

fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

pub fn rgb_to_u32(size: Vec2<usize>, data: &[u8]) -> Vec<u32> {
    let mut buf = Vec::with_capacity(size.area());
    for chunk in data.chunks_exact(3).take(size.area()) {
        buf.push(pack_u32(chunk[0], chunk[1], chunk[2]));
    }
    buf
}

pub fn nv21_to_u32(size: Vec2<usize>, data: &[u8]) -> Result<Vec<u32>, ImageError> {
    let rgb = nv21_to_rgb(size, data)?;
    Ok(rgb_to_u32(size, &rgb))
}

/// Convert any supported payload to packed `0xAARRGGBB` pixels.
///
/// Returns the pixel buffer with its actual size, which for encoded formats
/// is only known after decoding.
pub fn image_to_u32(image: &Image) -> Result<(Vec2<usize>, Vec<u32>), ImageError> {
    ensure_frame(image)?;
    match image.format {
        PixelFormat::Rgb8 => Ok((image.size, rgb_to_u32(image.size, &image.data))),
        PixelFormat::Nv21 => Ok((image.size, nv21_to_u32(image.size, &image.data)?)),
        PixelFormat::Png => {
            let rgb = png_to_rgb(image)?;
            Ok((rgb.size, rgb_to_u32(rgb.size, &rgb.data)))
        }
    }
}

/// Nearest-neighbour resample of a packed buffer to `dst_size`.
///
/// An empty source produces an all-black buffer.
pub fn scale_nearest(src_size: Vec2<usize>, src: &[u32], dst_size: Vec2<usize>) -> Vec<u32> {
    if src_size.area() == 0 || src.len() < src_size.area() {
        return vec![0xFF00_0000; dst_size.area()];
    }
    if src_size == dst_size {
        return src[..dst_size.area()].to_vec();
    }

    let mut dst = Vec::with_capacity(dst_size.area());
    for y in 0..dst_size.y {
        let sy = y * src_size.y / dst_size.y;
        let row = &src[sy * src_size.x..(sy + 1) * src_size.x];
        for x in 0..dst_size.x {
            dst.push(row[x * src_size.x / dst_size.x]);
        }
    }
    dst
}
