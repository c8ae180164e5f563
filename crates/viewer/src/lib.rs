//! Frame statistics and display state for the status viewer.
//!
//! [`ViewerState`] records incoming frames and keeps a windowed FPS
//! estimate. [`Viewer`] owns the state, applies stimuli (load sample, feed
//! ticks, clear, status changes) and hands the result to a [`StatusView`]
//! after every mutation. A [`Feed`] is the simulated live source: a
//! cancellable timer task that produces ticks on a fixed schedule.
//!
//! All timestamps are `tokio::time::Instant`, so tests can drive the clock
//! with tokio's paused time.

pub mod config;
pub mod error;
pub mod feed;
pub mod fps;
pub mod state;
pub mod status;
pub mod view;
pub mod viewer;

pub use config::{FeedConfig, FeedSource, ViewerConfig};
pub use error::ViewerError;
pub use feed::{Feed, FeedHandle, FeedPoll};
pub use fps::FpsWindow;
pub use state::ViewerState;
pub use status::ConnectionStatus;
pub use view::{LogView, Snapshot, StatusView, frame_to_window};
pub use viewer::{Viewer, ViewerEvent};
