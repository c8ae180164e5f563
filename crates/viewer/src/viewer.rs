use {
    crate::{
        ConnectionStatus, Feed, FeedConfig, FeedHandle, FeedPoll, FeedSource, StatusView,
        ViewerConfig, ViewerError, ViewerState,
    },
    image::Image,
    std::future,
    tokio::time::{self, Instant},
};

const MESSAGE_SAMPLE: &str = "Sample frame loaded";
const MESSAGE_RECEIVED: &str = "Frame received";
const MESSAGE_FEED_RUNNING: &str = "Simulating live feed...";
const MESSAGE_FEED_COMPLETED: &str = "Live feed simulation completed";
const MESSAGE_FEED_CANCELLED: &str = "Live feed simulation cancelled";

/// What a call to [`Viewer::step`] or [`Viewer::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The startup delay passed and the link reported ready.
    Ready,
    /// A feed tick was ingested.
    Frame { tick: u64 },
    /// The feed delivered all its ticks.
    FeedCompleted,
    /// The feed was cancelled before its last tick.
    FeedCancelled,
}

// a running feed and the payload each of its ticks ingests
struct ActiveFeed {
    feed: Feed,
    frame: Image,
}

/// Owns the viewer state and applies every stimulus to it.
///
/// Single owner, single writer: feed ticks reach the state only through
/// [`step`](Self::step) or [`poll`](Self::poll), one at a time, and the view
/// is rendered after each change.
pub struct Viewer<V: StatusView> {
    state: ViewerState,
    view: V,
    config: ViewerConfig,
    ready_at: Instant,
    active: Option<ActiveFeed>,
}

impl<V: StatusView> Viewer<V> {
    pub fn new(config: ViewerConfig, view: V) -> Self {
        let mut viewer = Self {
            state: ViewerState::new(config.fps_window()),
            view,
            ready_at: Instant::now() + config.startup_delay(),
            config,
            active: None,
        };
        log::info!("viewer initialized");
        viewer.render();
        viewer
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn is_feed_running(&self) -> bool {
        self.active.is_some()
    }

    fn render(&mut self) {
        self.view.render(&self.state);
    }

    fn frame_for(&self, source: FeedSource) -> Image {
        match source {
            FeedSource::Sample => image::sample_frame(),
            FeedSource::TestPattern => image::stripe_pattern(self.config.frame_size().to_usize()),
        }
    }

    fn frame_info_for(&self, source: FeedSource) -> String {
        let size = self.config.frame_size();
        match source {
            FeedSource::Sample => format!("Sample edge detection frame ({}x{})", size.x, size.y),
            FeedSource::TestPattern => format!("Mock camera test pattern ({}x{})", size.x, size.y),
        }
    }

    fn ingest(&mut self, frame: Image, source: FeedSource) {
        let size = self.config.frame_size();
        let frame_info = self.frame_info_for(source);
        self.state.ingest_frame(frame, size.x, size.y);
        self.state.set_frame_info(frame_info);
    }

    /// Show the embedded sample frame.
    pub fn load_sample(&mut self) {
        let frame = self.frame_for(FeedSource::Sample);
        self.ingest(frame, FeedSource::Sample);
        self.state.set_message(MESSAGE_SAMPLE);
        log::info!("sample frame loaded");
        self.render();
    }

    /// Ingest a frame from an outside producer.
    pub fn receive_frame(&mut self, frame: Image, width: u32, height: u32) {
        self.state.ingest_frame(frame, width, height);
        self.state.set_message(MESSAGE_RECEIVED);
        self.state.set_frame_info(format!("Received frame ({}x{})", width, height));
        self.render();
    }

    /// Drop the current frame and zero the statistics. A running feed keeps
    /// running.
    pub fn clear(&mut self) {
        self.state.clear();
        log::info!("display cleared");
        self.render();
    }

    pub fn mark_ready(&mut self) {
        self.state.mark_ready();
        self.render();
    }

    /// Start the feed from the viewer configuration.
    pub fn simulate_default_feed(&mut self) -> Result<FeedHandle, ViewerError> {
        let config = self.config.feed().clone();
        self.simulate_feed(config)
    }

    /// Start a simulated feed and report the link as connected.
    ///
    /// A feed that is already running is cancelled first. If the link has
    /// not reported ready yet it does so now, so the status never skips a
    /// state. Fails only when called outside a tokio runtime.
    pub fn simulate_feed(&mut self, config: FeedConfig) -> Result<FeedHandle, ViewerError> {
        if let Some(active) = self.active.as_ref() {
            active.feed.handle().cancel();
            self.finish_feed(true);
        }

        let frame = self.frame_for(config.source());
        let feed = Feed::start(config)?;
        let handle = feed.handle();
        self.active = Some(ActiveFeed { feed, frame });

        if self.state.connection_status() == ConnectionStatus::Uninitialized {
            self.mark_ready();
        }
        self.state.mark_connected();
        self.state.set_message(MESSAGE_FEED_RUNNING);
        self.render();
        Ok(handle)
    }

    /// Cancel the running feed, if any.
    pub fn cancel_feed(&mut self) -> Option<ViewerEvent> {
        let active = self.active.as_ref()?;
        active.feed.handle().cancel();
        Some(self.finish_feed(true))
    }

    fn finish_feed(&mut self, cancelled: bool) -> ViewerEvent {
        self.active = None;
        self.state.mark_disconnected();
        if cancelled {
            self.state.set_message(MESSAGE_FEED_CANCELLED);
            log::info!("live feed simulation cancelled");
        } else {
            self.state.set_message(MESSAGE_FEED_COMPLETED);
            log::info!("live feed simulation completed");
        }
        self.render();
        if cancelled {
            ViewerEvent::FeedCancelled
        } else {
            ViewerEvent::FeedCompleted
        }
    }

    fn apply_tick(&mut self, tick: u64) -> ViewerEvent {
        if let Some(active) = self.active.as_ref() {
            let frame = active.frame.clone();
            let source = active.feed.config().source();
            self.ingest(frame, source);
            self.render();
        }
        ViewerEvent::Frame { tick }
    }

    fn apply_feed_end(&mut self) -> ViewerEvent {
        let cancelled = self
            .active
            .as_ref()
            .is_some_and(|active| active.feed.is_cancelled());
        self.finish_feed(cancelled)
    }

    fn apply_ready(&mut self) -> ViewerEvent {
        self.mark_ready();
        ViewerEvent::Ready
    }

    // the pending ready deadline, while the link has not reported yet
    fn pending_ready(&self) -> Option<Instant> {
        (self.state.connection_status() == ConnectionStatus::Uninitialized).then_some(self.ready_at)
    }

    /// Handle everything that is already due, without waiting.
    ///
    /// Returns the first event handled, or `None` if nothing was due. Call
    /// repeatedly to drain.
    pub fn poll(&mut self) -> Option<ViewerEvent> {
        if self.pending_ready().is_some_and(|at| at <= Instant::now()) {
            return Some(self.apply_ready());
        }
        let poll = self.active.as_mut()?.feed.try_recv();
        match poll {
            FeedPoll::Tick(tick) => Some(self.apply_tick(tick)),
            FeedPoll::Pending => None,
            FeedPoll::Ended => Some(self.apply_feed_end()),
        }
    }

    /// Wait for the next scheduled event and handle it.
    ///
    /// Returns `None` when nothing is scheduled: the link already reported
    /// and no feed is running.
    pub async fn step(&mut self) -> Option<ViewerEvent> {
        let ready_at = self.pending_ready();
        if ready_at.is_none() && self.active.is_none() {
            return None;
        }

        enum Wake {
            Ready,
            Tick(Option<u64>),
        }

        let wake = {
            let feed = self.active.as_mut().map(|active| &mut active.feed);
            tokio::select! {
                biased;
                _ = async {
                    match ready_at {
                        Some(at) => time::sleep_until(at).await,
                        None => future::pending().await,
                    }
                } => Wake::Ready,
                tick = async {
                    match feed {
                        Some(feed) => feed.recv().await,
                        None => future::pending().await,
                    }
                } => Wake::Tick(tick),
            }
        };

        Some(match wake {
            Wake::Ready => self.apply_ready(),
            Wake::Tick(Some(tick)) => self.apply_tick(tick),
            Wake::Tick(None) => self.apply_feed_end(),
        })
    }

    /// Drive the running feed until it completes or is cancelled.
    ///
    /// Returns the number of frames ingested from the feed.
    pub async fn run_feed(&mut self) -> u64 {
        let mut frames = 0;
        while self.active.is_some() {
            match self.step().await {
                Some(ViewerEvent::Frame { .. }) => frames += 1,
                Some(ViewerEvent::FeedCompleted | ViewerEvent::FeedCancelled) | None => break,
                Some(ViewerEvent::Ready) => {}
            }
        }
        frames
    }
}
