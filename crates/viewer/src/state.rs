use {
    crate::{ConnectionStatus, FpsWindow, Snapshot},
    base::Vec2,
    image::Image,
    std::time::SystemTime,
    tokio::time::{Duration, Instant},
};

pub(crate) const MESSAGE_READY: &str = "Web viewer ready";
pub(crate) const MESSAGE_CLEARED: &str = "Display cleared";
pub(crate) const INFO_NO_FRAME: &str = "No frame received yet";

/// Everything the display shows, and nothing else.
///
/// Created once at startup and only changed through the methods below.
/// Payloads are never inspected: width and height are recorded as given.
#[derive(Debug, Clone)]
pub struct ViewerState {
    current_frame: Option<Image>,
    frame_size: Option<Vec2<u32>>,
    fps: FpsWindow,
    last_update: Option<Instant>,
    last_update_wall: Option<SystemTime>,
    status: ConnectionStatus,
    frames_received: u64,
    message: String,
    frame_info: String,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(crate::fps::DEFAULT_FPS_WINDOW)
    }
}

impl ViewerState {
    pub fn new(fps_window: Duration) -> Self {
        Self {
            current_frame: None,
            frame_size: None,
            fps: FpsWindow::new(fps_window),
            last_update: None,
            last_update_wall: None,
            status: ConnectionStatus::Uninitialized,
            frames_received: 0,
            message: MESSAGE_READY.to_string(),
            frame_info: INFO_NO_FRAME.to_string(),
        }
    }

    /// Record a new frame now.
    pub fn ingest_frame(&mut self, frame: Image, width: u32, height: u32) {
        self.ingest_frame_at(frame, width, height, Instant::now());
    }

    /// Record a new frame at `now`.
    pub fn ingest_frame_at(&mut self, frame: Image, width: u32, height: u32, now: Instant) {
        self.current_frame = Some(frame);
        self.frame_size = Some(Vec2::new(width, height));
        self.frames_received += 1;

        if let Some(fps) = self.fps.record(now) {
            log::debug!("current fps: {:.1}", fps);
        }

        self.last_update = Some(now);
        self.last_update_wall = Some(SystemTime::now());
    }

    /// Drop the frame and zero the statistics. The status, the time of the
    /// last update and the FPS window start are kept.
    pub fn clear(&mut self) {
        self.current_frame = None;
        self.frame_size = None;
        self.fps.clear();
        self.frames_received = 0;
        self.message = MESSAGE_CLEARED.to_string();
        self.frame_info = INFO_NO_FRAME.to_string();
    }

    pub fn mark_ready(&mut self) {
        self.set_status(ConnectionStatus::Ready);
    }

    pub fn mark_connected(&mut self) {
        self.set_status(ConnectionStatus::Connected);
    }

    pub fn mark_disconnected(&mut self) {
        self.set_status(ConnectionStatus::Disconnected);
    }

    fn set_status(&mut self, status: ConnectionStatus) {
        if !self.status.can_transition_to(status) {
            log::warn!("unexpected status change: {:?} -> {:?}", self.status, status);
        } else {
            log::info!("status: {}", status);
        }
        self.status = status;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_frame_info(&mut self, frame_info: impl Into<String>) {
        self.frame_info = frame_info.into();
    }

    pub fn current_frame(&self) -> Option<&Image> {
        self.current_frame.as_ref()
    }

    pub fn frame_size(&self) -> Option<Vec2<u32>> {
        self.frame_size
    }

    pub fn frame_count_window(&self) -> u32 {
        self.fps.count()
    }

    pub fn window_start(&self) -> Option<Instant> {
        self.fps.start()
    }

    pub fn current_fps(&self) -> f64 {
        self.fps.fps()
    }

    pub fn last_update(&self) -> Option<Instant> {
        self.last_update
    }

    pub fn last_update_wall(&self) -> Option<SystemTime> {
        self.last_update_wall
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.status
    }

    /// Frames ingested since startup or the last clear.
    pub fn frames_received(&self) -> u64 {
        self.frames_received
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn frame_info(&self) -> &str {
        &self.frame_info
    }

    /// The display strings for the current state.
    pub fn snapshot(&self) -> Snapshot {
        let resolution = match self.frame_size {
            Some(size) => format!("{} × {}", size.x, size.y),
            None => "-".to_string(),
        };
        let fps = match self.current_frame {
            Some(_) => format!("{:.1}", self.fps.fps()),
            None => "-".to_string(),
        };
        let last_update = match self.last_update_wall {
            Some(time) => base::format_clock(time),
            None => "-".to_string(),
        };

        Snapshot {
            message: self.message.clone(),
            connection: self.status.to_string(),
            resolution,
            fps,
            last_update,
            frames_received: self.frames_received,
            frame_info: self.frame_info.clone(),
            has_frame: self.current_frame.is_some(),
        }
    }
}
