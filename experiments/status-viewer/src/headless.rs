use status_viewer::{Command, parse_command};
use viewer::{LogView, Viewer, ViewerConfig, ViewerEvent};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    base::init_stdout_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_command(&args)?;

    log::info!("Frame Status Viewer (headless)");
    let mut viewer = Viewer::new(ViewerConfig::default(), LogView::new());

    // wait for the simulated link
    if viewer.step().await == Some(ViewerEvent::Ready) {
        log::info!("link ready");
    }

    match command {
        Command::Sample => viewer.load_sample(),
        Command::Feed(config) => {
            let handle = viewer.simulate_feed(config)?;
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    handle.cancel();
                }
            });
            let frames = viewer.run_feed().await;
            log::info!("feed ended after {} frames", frames);
        }
    }

    log::info!("Exiting...");
    Ok(())
}
