use clap::Parser;
use std::io::{self, Write};
use tracing::info;
use wfsr::config::{Args, Config, Mode};
use wfsr::error::AppError;
use wfsr::terminal::TerminalApp;
use wfsr::{logging, present, update, Message, SceneState};

/// Runs the full-screen terminal view, or with `--dump` prints one frame and exits
fn main() -> Result<(), AppError> {
    let config = Config::try_from(Args::parse())?;
    let _log_guard = logging::init(&config)?;

    info!(
        width = config.width,
        height = config.height,
        mode = ?config.mode,
        "wfsr {}",
        env!("CARGO_PKG_VERSION")
    );

    match config.mode {
        Mode::Interactive => TerminalApp::new(&config).run(),
        Mode::Dump { ticks, cols } => {
            let mut scene = SceneState::new();
            for _ in 0..ticks {
                scene = update(scene, Message::Tick).0;
            }
            let text = present::dump(&scene, config.width, config.height, cols);
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
