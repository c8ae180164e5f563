use {
    base::Vec2,
    image::Image,
    std::{sync::Arc, time::Duration},
    viewer::{FeedConfig, StatusView, ViewerState, frame_to_window},
};

const BACKGROUND: u32 = 0xFF00_0000;

/// What the headless binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Sample,
    Feed(FeedConfig),
}

/// Parse `[sample|feed|pattern] [interval_ms] [max_ticks]`.
///
/// `feed` defaults to five sample frames two seconds apart, `pattern` to the
/// mock camera (test pattern every 100 ms until interrupted).
pub fn parse_command(args: &[String]) -> Result<Command, String> {
    let mut config = match args.first().map(String::as_str) {
        None | Some("feed") => FeedConfig::default(),
        Some("pattern") => FeedConfig::mock_camera(),
        Some("sample") => return Ok(Command::Sample),
        Some(other) => return Err(format!("unknown command: {}", other)),
    };

    if let Some(interval) = args.get(1) {
        let millis = interval
            .parse::<u64>()
            .map_err(|e| format!("invalid interval {:?}: {}", interval, e))?;
        config = config.with_interval(Duration::from_millis(millis));
    }

    if let Some(max_ticks) = args.get(2) {
        let max_ticks = max_ticks
            .parse::<u64>()
            .map_err(|e| format!("invalid tick count {:?}: {}", max_ticks, e))?;
        config = config.with_max_ticks(max_ticks);
    }

    Ok(Command::Feed(config))
}

/// Keeps a window-sized pixel buffer and a title line in sync with the state.
pub struct WindowView {
    size: Vec2<usize>,
    buffer: Vec<u32>,
    title: String,
    shown: Option<Image>,
}

impl WindowView {
    pub fn new(size: Vec2<usize>) -> Self {
        Self {
            size,
            buffer: vec![BACKGROUND; size.area()],
            title: String::new(),
            shown: None,
        }
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn show(&mut self, frame: Option<&Image>) {
        match frame {
            Some(frame) => {
                // repeated feed frames share their bytes, skip the conversion
                if self
                    .shown
                    .as_ref()
                    .is_some_and(|shown| Arc::ptr_eq(&shown.data, &frame.data))
                {
                    return;
                }
                match frame_to_window(frame, self.size) {
                    Ok(pixels) => self.buffer = pixels,
                    Err(error) => {
                        log::warn!("cannot display frame: {}", error);
                        self.buffer.fill(BACKGROUND);
                    }
                }
                self.shown = Some(frame.clone());
            }
            None => {
                self.buffer.fill(BACKGROUND);
                self.shown = None;
            }
        }
    }
}

impl StatusView for WindowView {
    fn render(&mut self, state: &ViewerState) {
        let snapshot = state.snapshot();
        self.title = format!(
            "{} | {} | {} @ {} fps | updated {} | frames {}",
            snapshot.message,
            snapshot.connection,
            snapshot.resolution,
            snapshot.fps,
            snapshot.last_update,
            snapshot.frames_received
        );
        self.show(state.current_frame());
    }
}
