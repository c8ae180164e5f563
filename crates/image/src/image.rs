use {crate::PixelFormat, base::Vec2, std::sync::Arc};

/// A frame payload: pixel bytes plus the format needed to read them.
///
/// The bytes sit behind an `Arc` so the same frame can be handed to the
/// viewer over and over without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Arc<[u8]>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: impl Into<Arc<[u8]>>, format: PixelFormat) -> Self {
        Self {
            size,
            data: data.into(),
            format,
        }
    }
}
