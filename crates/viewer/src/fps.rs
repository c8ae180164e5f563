use tokio::time::{Duration, Instant};

/// Length of the FPS measurement window.
pub const DEFAULT_FPS_WINDOW: Duration = Duration::from_millis(1000);

/// Frame counter that turns into an FPS estimate once per window.
///
/// The estimate is `frames / elapsed` where `elapsed` runs from the first
/// frame of the window to the frame that closes it. Between window
/// boundaries the last estimate is held unchanged.
#[derive(Debug, Clone)]
pub struct FpsWindow {
    window: Duration,
    count: u32,
    start: Option<Instant>,
    fps: f64,
}

impl Default for FpsWindow {
    fn default() -> Self {
        Self::new(DEFAULT_FPS_WINDOW)
    }
}

impl FpsWindow {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            count: 0,
            start: None,
            fps: 0.0,
        }
    }

    /// Count one frame at `now`. Returns the new estimate if this frame
    /// closed the window.
    pub fn record(&mut self, now: Instant) -> Option<f64> {
        self.count += 1;
        let start = *self.start.get_or_insert(now);

        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.window || elapsed.is_zero() {
            return None;
        }

        self.fps = self.count as f64 * 1000.0 / elapsed.as_millis() as f64;
        self.count = 0;
        self.start = Some(now);
        Some(self.fps)
    }

    /// Zero the count and the estimate. The window keeps its start, so the
    /// next frame is measured against it.
    pub fn clear(&mut self) {
        self.count = 0;
        self.fps = 0.0;
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Frames counted since the window last closed.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn start(&self) -> Option<Instant> {
        self.start
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
