use base::Vec2;
use tokio::time::{Duration, Instant};
use viewer::{ConnectionStatus, ViewerState};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_defaults() {
    let state = ViewerState::default();
    let snapshot = state.snapshot();

    assert!(state.current_frame().is_none());
    assert_eq!(state.frame_size(), None);
    assert_eq!(state.frame_count_window(), 0);
    assert_eq!(state.window_start(), None);
    assert_eq!(state.current_fps(), 0.0);
    assert_eq!(state.last_update(), None);
    assert_eq!(state.connection_status(), ConnectionStatus::Uninitialized);

    assert_eq!(snapshot.message, "Web viewer ready");
    assert_eq!(snapshot.connection, "Initialized");
    assert_eq!(snapshot.resolution, "-");
    assert_eq!(snapshot.fps, "-");
    assert_eq!(snapshot.last_update, "-");
    assert_eq!(snapshot.frame_info, "No frame received yet");
    assert!(!snapshot.has_frame);
}

#[test]
fn test_ingest_records_frame() {
    let mut state = ViewerState::default();
    let t0 = Instant::now();

    state.ingest_frame_at(image::sample_frame(), 640, 480, t0);

    assert_eq!(state.current_frame(), Some(&image::sample_frame()));
    assert_eq!(state.frame_size(), Some(Vec2::new(640, 480)));
    assert_eq!(state.frame_count_window(), 1);
    assert_eq!(state.window_start(), Some(t0));
    assert_eq!(state.last_update(), Some(t0));
    assert_eq!(state.frames_received(), 1);

    let snapshot = state.snapshot();
    assert_eq!(snapshot.resolution, "640 × 480");
    assert_eq!(snapshot.fps, "0.0");
    assert_eq!(snapshot.last_update.len(), 8);
    assert!(snapshot.has_frame);
}

#[test]
fn test_dimensions_taken_as_given() {
    let mut state = ViewerState::default();
    // the sample is 8x8 but any reported size is accepted
    state.ingest_frame(image::sample_frame(), 0, 99999);
    assert_eq!(state.frame_size(), Some(Vec2::new(0, 99999)));
}

#[test]
fn test_fps_recomputed_on_third_frame() {
    let mut state = ViewerState::default();
    let t0 = Instant::now();
    let frame = image::sample_frame();

    state.ingest_frame_at(frame.clone(), 640, 480, t0);
    state.ingest_frame_at(frame.clone(), 640, 480, t0 + ms(900));
    assert_eq!(state.current_fps(), 0.0);
    assert_eq!(state.frame_count_window(), 2);

    state.ingest_frame_at(frame, 640, 480, t0 + ms(1200));
    assert!((state.current_fps() - 2.5).abs() < 1e-9);
    assert_eq!(state.frame_count_window(), 0);
    assert_eq!(state.window_start(), Some(t0 + ms(1200)));
    assert_eq!(state.last_update(), Some(t0 + ms(1200)));
    assert_eq!(state.snapshot().fps, "2.5");
}

#[test]
fn test_clear_resets_statistics() {
    let mut state = ViewerState::default();
    let t0 = Instant::now();
    state.ingest_frame_at(image::sample_frame(), 640, 480, t0);
    state.ingest_frame_at(image::sample_frame(), 640, 480, t0 + ms(1000));
    state.mark_ready();

    state.clear();

    assert!(state.current_frame().is_none());
    assert_eq!(state.frame_size(), None);
    assert_eq!(state.frame_count_window(), 0);
    assert_eq!(state.current_fps(), 0.0);
    assert_eq!(state.frames_received(), 0);
    assert_eq!(state.connection_status(), ConnectionStatus::Ready);
    assert_eq!(state.last_update(), Some(t0 + ms(1000)));
    assert_eq!(state.window_start(), Some(t0 + ms(1000)));

    let snapshot = state.snapshot();
    assert_eq!(snapshot.message, "Display cleared");
    assert_eq!(snapshot.resolution, "-");
    assert_eq!(snapshot.fps, "-");
    assert_eq!(snapshot.frame_info, "No frame received yet");
}

#[test]
fn test_clear_is_idempotent() {
    let mut state = ViewerState::default();
    let t0 = Instant::now();
    state.ingest_frame_at(image::sample_frame(), 640, 480, t0);
    state.ingest_frame_at(image::sample_frame(), 640, 480, t0 + ms(300));

    state.clear();
    let once = state.clone();
    state.clear();

    assert_eq!(state.snapshot(), once.snapshot());
    assert_eq!(state.current_frame(), once.current_frame());
    assert_eq!(state.frame_size(), once.frame_size());
    assert_eq!(state.frame_count_window(), once.frame_count_window());
    assert_eq!(state.window_start(), once.window_start());
    assert_eq!(state.current_fps(), once.current_fps());
    assert_eq!(state.last_update(), once.last_update());
    assert_eq!(state.connection_status(), once.connection_status());
}

#[test]
fn test_window_spans_clear() {
    let mut state = ViewerState::default();
    let t0 = Instant::now();
    state.ingest_frame_at(image::sample_frame(), 640, 480, t0);
    state.clear();
    assert_eq!(state.window_start(), Some(t0));

    // one frame counted since the clear, measured from the old start
    state.ingest_frame_at(image::sample_frame(), 640, 480, t0 + ms(1100));
    assert!((state.current_fps() - 1000.0 / 1100.0).abs() < 1e-9);
    assert_eq!(state.window_start(), Some(t0 + ms(1100)));
    assert_eq!(state.frame_count_window(), 0);
}

#[test]
fn test_status_transitions() {
    let mut state = ViewerState::default();
    state.mark_ready();
    assert_eq!(state.connection_status(), ConnectionStatus::Ready);
    state.mark_connected();
    assert_eq!(state.connection_status(), ConnectionStatus::Connected);
    assert_eq!(state.snapshot().connection, "Connected (simulated)");
    state.mark_disconnected();
    assert_eq!(state.connection_status(), ConnectionStatus::Disconnected);
    assert_eq!(state.snapshot().connection, "Disconnected");
}

#[test]
fn test_transition_table() {
    use ConnectionStatus::*;
    assert!(Uninitialized.can_transition_to(Ready));
    assert!(Ready.can_transition_to(Connected));
    assert!(Connected.can_transition_to(Disconnected));
    assert!(Disconnected.can_transition_to(Connected));

    assert!(!Uninitialized.can_transition_to(Connected));
    assert!(!Ready.can_transition_to(Disconnected));
    assert!(!Disconnected.can_transition_to(Ready));
    assert!(!Connected.can_transition_to(Connected));
}
