use crate::error::AppError;
use crate::present::MAX_DUMP_COLS;
use crate::renderer::{HEIGHT, WIDTH};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Animation timer period in milliseconds
pub const TICK_MILLIS: u64 = 50;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wfsr", version, about = "Spinning wireframe cube in the terminal")]
pub struct Args {
    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the frame after this many ticks as ASCII art and exit
    #[arg(long, value_name = "TICKS")]
    pub dump: Option<u32>,

    /// Columns used by --dump
    #[arg(long, default_value_t = 80)]
    pub cols: usize,
}

/// How the program presents frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full-screen interactive terminal
    Interactive,
    /// Render once after a number of ticks and print to stdout
    Dump { ticks: u32, cols: usize },
}

/// Validated runtime configuration.
///
/// Surface size and tick period are fixed; only presentation and logging
/// come from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub tick_period: Duration,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: WIDTH,
            height: HEIGHT,
            tick_period: Duration::from_millis(TICK_MILLIS),
            log_file: None,
            log_level: "info".to_string(),
            mode: Mode::Interactive,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mode = match args.dump {
            Some(_) if args.cols == 0 || args.cols > MAX_DUMP_COLS => {
                return Err(AppError::Config(format!(
                    "--cols must be between 1 and {MAX_DUMP_COLS}, got {}",
                    args.cols
                )));
            }
            Some(ticks) => Mode::Dump {
                ticks,
                cols: args.cols,
            },
            None => Mode::Interactive,
        };
        Ok(Config {
            log_file: args.log_file,
            log_level: args.log_level,
            mode,
            ..Config::default()
        })
    }
}
