use tokio::time::{self, Duration, Instant};
use viewer::{Feed, FeedConfig, FeedPoll, ViewerError};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[tokio::test(start_paused = true)]
async fn test_feed_delivers_max_ticks_in_order() {
    let mut feed = Feed::start(FeedConfig::default()).unwrap();

    let mut ticks = Vec::new();
    while let Some(tick) = feed.recv().await {
        ticks.push(tick);
    }

    assert_eq!(ticks, vec![1, 2, 3, 4, 5]);
    assert!(!feed.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn test_feed_fixed_rate_schedule() {
    let start = Instant::now();
    let mut feed = Feed::start(FeedConfig::default().with_interval(ms(2000))).unwrap();

    while let Some(tick) = feed.recv().await {
        assert_eq!(Instant::now() - start, ms(2000) * tick as u32);
    }
}

#[tokio::test(start_paused = true)]
async fn test_slow_consumer_keeps_schedule() {
    let start = Instant::now();
    let mut feed = Feed::start(
        FeedConfig::default()
            .with_interval(ms(100))
            .with_max_ticks(3),
    )
    .unwrap();

    // ticks queue up while the consumer is busy instead of drifting
    time::sleep(ms(350)).await;
    assert_eq!(feed.try_recv(), FeedPoll::Tick(1));
    assert_eq!(feed.try_recv(), FeedPoll::Tick(2));
    assert_eq!(feed.try_recv(), FeedPoll::Tick(3));
    assert_eq!(feed.recv().await, None);
    assert_eq!(Instant::now() - start, ms(350));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_further_ticks() {
    let mut feed = Feed::start(FeedConfig::default()).unwrap();
    let handle = feed.handle();

    assert_eq!(feed.recv().await, Some(1));
    assert_eq!(feed.recv().await, Some(2));
    handle.cancel();

    assert!(handle.is_cancelled());
    assert_eq!(feed.recv().await, None);
    time::sleep(ms(20_000)).await;
    assert_eq!(feed.try_recv(), FeedPoll::Ended);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_discards_queued_ticks() {
    let mut feed = Feed::start(FeedConfig::default().with_interval(ms(10))).unwrap();

    time::sleep(ms(35)).await;
    feed.handle().cancel();

    assert_eq!(feed.try_recv(), FeedPoll::Ended);
    assert_eq!(feed.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_from_another_task() {
    let mut feed = Feed::start(FeedConfig::default()).unwrap();
    let handle = feed.handle();

    tokio::spawn(async move {
        time::sleep(ms(5000)).await;
        handle.cancel();
    });

    let mut ticks = Vec::new();
    while let Some(tick) = feed.recv().await {
        ticks.push(tick);
    }
    assert_eq!(ticks, vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn test_try_recv_pending_before_first_tick() {
    let start = Instant::now();
    let mut feed = Feed::start(FeedConfig::default()).unwrap();
    assert_eq!(feed.try_recv(), FeedPoll::Pending);
    time::sleep(ms(1999)).await;
    assert_eq!(feed.try_recv(), FeedPoll::Pending);
    assert_eq!(feed.recv().await, Some(1));
    assert_eq!(Instant::now() - start, ms(2000));
}

#[tokio::test(start_paused = true)]
async fn test_zero_ticks_ends_immediately() {
    let mut feed = Feed::start(FeedConfig::default().with_max_ticks(0)).unwrap();
    assert_eq!(feed.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_unbounded_feed_runs_until_cancelled() {
    let mut feed = Feed::start(FeedConfig::mock_camera()).unwrap();
    for expected in 1..=50 {
        assert_eq!(feed.recv().await, Some(expected));
    }
    feed.handle().cancel();
    assert_eq!(feed.recv().await, None);
}

#[test]
fn test_start_outside_runtime_fails() {
    match Feed::start(FeedConfig::default()) {
        Err(ViewerError::NoRuntime) => {}
        Err(other) => panic!("Expected ViewerError::NoRuntime, got {}", other),
        Ok(_) => panic!("Expected ViewerError::NoRuntime"),
    }
}
