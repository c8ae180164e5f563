use base::Vec2;
use tokio::time::Duration;
use viewer::{FeedConfig, FeedSource, ViewerConfig};

#[test]
fn test_feed_config_defaults() {
    let config = FeedConfig::default();

    assert_eq!(config.interval(), Duration::from_millis(2000));
    assert_eq!(config.max_ticks(), Some(5));
    assert_eq!(config.source(), FeedSource::Sample);
}

#[test]
fn test_feed_config_builder() {
    let config = FeedConfig::default()
        .with_interval(Duration::from_millis(250))
        .with_max_ticks(12)
        .with_source(FeedSource::TestPattern);

    assert_eq!(config.interval(), Duration::from_millis(250));
    assert_eq!(config.max_ticks(), Some(12));
    assert_eq!(config.source(), FeedSource::TestPattern);
    assert_eq!(config.unbounded().max_ticks(), None);
}

#[test]
fn test_feed_config_zero_interval_raised() {
    let config = FeedConfig::default().with_interval(Duration::ZERO);
    assert_eq!(config.interval(), Duration::from_millis(1));
}

#[test]
fn test_mock_camera_preset() {
    let config = FeedConfig::mock_camera();

    assert_eq!(config.interval(), Duration::from_millis(100));
    assert_eq!(config.max_ticks(), None);
    assert_eq!(config.source(), FeedSource::TestPattern);
}

#[test]
fn test_viewer_config_defaults() {
    let config = ViewerConfig::default();

    assert_eq!(config.startup_delay(), Duration::from_millis(1000));
    assert_eq!(config.fps_window(), Duration::from_millis(1000));
    assert_eq!(config.frame_size(), Vec2::new(640, 480));
    assert_eq!(config.feed(), &FeedConfig::default());
}

#[test]
fn test_viewer_config_partial_builder() {
    let config = ViewerConfig::default()
        .with_frame_size(Vec2::new(320, 240))
        .with_feed(FeedConfig::mock_camera());

    assert_eq!(config.frame_size(), Vec2::new(320, 240));
    assert_eq!(config.feed(), &FeedConfig::mock_camera());
    assert_eq!(config.startup_delay(), Duration::from_millis(1000)); // default
}
