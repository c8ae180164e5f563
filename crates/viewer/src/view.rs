use {
    crate::{ViewerError, ViewerState},
    base::Vec2,
    image::Image,
};

/// The display strings derived from a [`ViewerState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub message: String,
    pub connection: String,
    pub resolution: String,
    pub fps: String,
    pub last_update: String,
    pub frames_received: u64,
    pub frame_info: String,
    pub has_frame: bool,
}

/// Presentation side of the viewer.
///
/// The viewer calls `render` after every change to its state.
pub trait StatusView {
    fn render(&mut self, state: &ViewerState);
}

impl StatusView for () {
    fn render(&mut self, _state: &ViewerState) {}
}

impl<V: StatusView + ?Sized> StatusView for &mut V {
    fn render(&mut self, state: &ViewerState) {
        (**self).render(state);
    }
}

impl<V: StatusView + ?Sized> StatusView for Box<V> {
    fn render(&mut self, state: &ViewerState) {
        (**self).render(state);
    }
}

/// Writes every render to the log, one line per update.
#[derive(Debug, Default)]
pub struct LogView {
    renders: u64,
}

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }
}

impl StatusView for LogView {
    fn render(&mut self, state: &ViewerState) {
        self.renders += 1;
        let snapshot = state.snapshot();
        log::info!(
            "{} | link: {} | resolution: {} | fps: {} | last update: {} | frames: {} | {}",
            snapshot.message,
            snapshot.connection,
            snapshot.resolution,
            snapshot.fps,
            snapshot.last_update,
            snapshot.frames_received,
            snapshot.frame_info
        );
    }
}

/// Convert a frame payload to packed pixels filling a window of `size`.
pub fn frame_to_window(frame: &Image, size: Vec2<usize>) -> Result<Vec<u32>, ViewerError> {
    let (frame_size, pixels) = image::image_to_u32(frame)?;
    Ok(image::scale_nearest(frame_size, &pixels, size))
}
