use base::Vec2;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use status_viewer::WindowView;
use viewer::{FeedConfig, Viewer, ViewerConfig};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // optional log directory, stdout otherwise
    match std::env::args().nth(1) {
        Some(dir) => base::init_file_logger(dir)?,
        None => base::init_stdout_logger(),
    }

    log::info!("Frame Status Viewer");
    log::info!(
        "Controls: L load sample, S simulate feed, P test pattern, X cancel feed, C clear, ESC exit"
    );

    let config = ViewerConfig::default().with_frame_size(Vec2::new(WIDTH as u32, HEIGHT as u32));
    let mut viewer = Viewer::new(config, WindowView::new(Vec2::new(WIDTH, HEIGHT)));

    let mut window = Window::new(
        "Frame Status Viewer - ESC to exit",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )?;

    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::L, KeyRepeat::No) {
            viewer.load_sample();
        }
        if window.is_key_pressed(Key::S, KeyRepeat::No) {
            viewer.simulate_default_feed()?;
        }
        if window.is_key_pressed(Key::P, KeyRepeat::No) {
            viewer.simulate_feed(FeedConfig::mock_camera())?;
        }
        if window.is_key_pressed(Key::X, KeyRepeat::No) {
            viewer.cancel_feed();
        }
        if window.is_key_pressed(Key::C, KeyRepeat::No) {
            viewer.clear();
        }

        // apply whatever the timers produced since the last frame
        while viewer.poll().is_some() {}

        let view = viewer.view();
        window.set_title(view.title());
        window.update_with_buffer(view.buffer(), WIDTH, HEIGHT)?;
    }

    viewer.cancel_feed();
    log::info!("Exiting...");
    Ok(())
}
