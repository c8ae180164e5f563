//! Pixel handling for the frame viewer.
//!
//! Frames arrive as opaque payloads (an encoded PNG, raw RGB, or NV21 from a
//! camera). This crate turns them into packed `u32` pixels a window can show,
//! and provides the built-in frames: the embedded sample and the striped
//! test pattern.

pub mod argb;
pub mod error;
pub mod image;
pub mod pattern;
pub mod pixelformat;
pub mod rgb;

pub use error::ImageError;
pub use image::Image;
pub use pattern::{STRIPE_WIDTH, sample_frame, stripe_pattern};
pub use pixelformat::PixelFormat;
pub use rgb::{nv21_to_rgb, png_to_rgb};
pub use argb::{image_to_u32, nv21_to_u32, rgb_to_u32, scale_nearest};

pub(crate) use pixelformat::yuv_to_rgb;
