use std::fmt;

#[derive(Debug)]
pub enum ViewerError {
    Image(image::ImageError),
    NoRuntime,
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::Image(err) => write!(f, "image error: {err}"),
            ViewerError::NoRuntime => write!(f, "feed started outside a tokio runtime"),
        }
    }
}

impl std::error::Error for ViewerError {}

impl From<image::ImageError> for ViewerError {
    fn from(err: image::ImageError) -> Self {
        ViewerError::Image(err)
    }
}
