use {
    crate::{FeedConfig, ViewerError},
    std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    tokio::{
        runtime::Handle,
        sync::mpsc::{self, error::TryRecvError},
        task::AbortHandle,
        time::{self, Instant, MissedTickBehavior},
    },
};

// capacity of the tick channel
const CHANNEL_CAPACITY: usize = 4;

/// Cancels a running feed. Cheap to clone and safe to use from any task.
#[derive(Debug, Clone)]
pub struct FeedHandle {
    cancel: Arc<AtomicBool>,
    abort: AbortHandle,
}

impl FeedHandle {
    /// Stop the feed. No tick is delivered after this returns, including
    /// ticks already waiting in the channel.
    ///
    /// The viewer that owns the feed only notices on its next
    /// [`Viewer::poll`](crate::Viewer::poll) or [`Viewer::step`](crate::Viewer::step);
    /// until then its status still reads Connected. Use
    /// [`Viewer::cancel_feed`](crate::Viewer::cancel_feed) when holding the
    /// viewer itself.
    pub fn cancel(&self) {
        if !self.cancel.swap(true, Ordering::Relaxed) {
            log::debug!("feed cancelled");
        }
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
}

/// Result of a non-blocking look at the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPoll {
    Tick(u64),
    Pending,
    Ended,
}

/// A timer task that emits numbered ticks on a fixed schedule.
///
/// Tick `n` fires `n * interval` after the feed started, independent of how
/// long the consumer takes (fixed rate). The feed ends on its own after
/// `max_ticks`, or when cancelled or dropped.
pub struct Feed {
    receiver: mpsc::Receiver<u64>,
    handle: FeedHandle,
    config: FeedConfig,
}

impl Feed {
    /// Spawn the timer task on the current tokio runtime.
    pub fn start(config: FeedConfig) -> Result<Self, ViewerError> {
        let runtime = Handle::try_current().map_err(|_| ViewerError::NoRuntime)?;

        let (sender, receiver) = mpsc::channel::<u64>(CHANNEL_CAPACITY);
        let cancel = Arc::new(AtomicBool::new(false));

        let join_handle = runtime.spawn(Self::run(sender, config.clone(), Arc::clone(&cancel)));

        log::info!(
            "feed started: every {} ms, {}",
            config.interval().as_millis(),
            match config.max_ticks() {
                Some(max) => format!("{} ticks", max),
                None => "until cancelled".to_string(),
            }
        );

        Ok(Self {
            receiver,
            handle: FeedHandle {
                cancel,
                abort: join_handle.abort_handle(),
            },
            config,
        })
    }

    async fn run(sender: mpsc::Sender<u64>, config: FeedConfig, cancel: Arc<AtomicBool>) {
        let period = config.interval();
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);

        let mut tick = 0u64;
        while config.max_ticks().is_none_or(|max| tick < max) {
            interval.tick().await;
            if cancel.load(Ordering::Relaxed) {
                return;
            }
            tick += 1;
            if sender.send(tick).await.is_err() {
                log::debug!("feed receiver dropped after {} ticks", tick - 1);
                return;
            }
        }
        log::debug!("feed finished after {} ticks", tick);
    }

    pub fn handle(&self) -> FeedHandle {
        self.handle.clone()
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_cancelled()
    }

    /// Wait for the next tick. `None` once the feed has ended or was
    /// cancelled.
    pub async fn recv(&mut self) -> Option<u64> {
        if self.is_cancelled() {
            return None;
        }
        let tick = self.receiver.recv().await?;
        // cancelled while the tick sat in the channel
        if self.is_cancelled() { None } else { Some(tick) }
    }

    /// Take the next tick if one is due.
    pub fn try_recv(&mut self) -> FeedPoll {
        if self.is_cancelled() {
            return FeedPoll::Ended;
        }
        match self.receiver.try_recv() {
            Ok(tick) => FeedPoll::Tick(tick),
            Err(TryRecvError::Empty) => FeedPoll::Pending,
            Err(TryRecvError::Disconnected) => FeedPoll::Ended,
        }
    }
}

impl Drop for Feed {
    fn drop(&mut self) {
        self.handle.abort.abort();
    }
}
