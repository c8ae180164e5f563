use {base::Vec2, tokio::time::Duration};

// timers refuse zero periods
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Which built-in payload a simulated feed delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedSource {
    /// The embedded sample image.
    #[default]
    Sample,
    /// Striped NV21 frames from the mock camera.
    TestPattern,
}

/// Configuration for a simulated feed.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedConfig {
    interval: Duration,
    max_ticks: Option<u64>,
    source: FeedSource,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(2000),
            max_ticks: Some(5),
            source: FeedSource::Sample,
        }
    }
}

impl FeedConfig {
    /// The mock camera: test pattern at 10 frames per second until cancelled.
    pub fn mock_camera() -> Self {
        Self::default()
            .with_interval(Duration::from_millis(100))
            .unbounded()
            .with_source(FeedSource::TestPattern)
    }

    /// Set the time between ticks. Zero is raised to 1 ms.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_INTERVAL);
        self
    }

    /// Stop after `max_ticks` ticks.
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Tick until cancelled.
    pub fn unbounded(mut self) -> Self {
        self.max_ticks = None;
        self
    }

    pub fn with_source(mut self, source: FeedSource) -> Self {
        self.source = source;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_ticks(&self) -> Option<u64> {
        self.max_ticks
    }

    pub fn source(&self) -> FeedSource {
        self.source
    }
}

/// Configuration for the viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    startup_delay: Duration,
    fps_window: Duration,
    frame_size: Vec2<u32>,
    feed: FeedConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            startup_delay: Duration::from_millis(1000),
            fps_window: crate::fps::DEFAULT_FPS_WINDOW,
            frame_size: Vec2::new(640, 480),
            feed: FeedConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Set the delay before the simulated link reports ready.
    pub fn with_startup_delay(mut self, startup_delay: Duration) -> Self {
        self.startup_delay = startup_delay;
        self
    }

    /// Set the FPS measurement window. Zero is raised to 1 ms.
    pub fn with_fps_window(mut self, fps_window: Duration) -> Self {
        self.fps_window = fps_window.max(MIN_INTERVAL);
        self
    }

    /// Set the dimensions reported for built-in frames.
    pub fn with_frame_size(mut self, frame_size: Vec2<u32>) -> Self {
        self.frame_size = frame_size;
        self
    }

    /// Set the feed used when none is given explicitly.
    pub fn with_feed(mut self, feed: FeedConfig) -> Self {
        self.feed = feed;
        self
    }

    pub fn startup_delay(&self) -> Duration {
        self.startup_delay
    }

    pub fn fps_window(&self) -> Duration {
        self.fps_window
    }

    pub fn frame_size(&self) -> Vec2<u32> {
        self.frame_size
    }

    pub fn feed(&self) -> &FeedConfig {
        &self.feed
    }
}
