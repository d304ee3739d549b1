//! Auraforge teaser entry point.

use std::{fs::File, path::PathBuf, sync::Arc, time::Duration};

use auraforge_tui::{App, Runtime, TerminalDriver};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Auraforge teaser TUI
#[derive(Parser, Debug)]
#[command(name = "auraforge")]
#[command(about = "Terminal teaser for the Auraforge focus trainer")]
#[command(version)]
struct Args {
    /// Frames per second while animations are running
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(1..=240))]
    fps: u16,

    /// Start with the snow overlay disabled
    #[arg(long)]
    no_snow: bool,

    /// Append logs to this file
    ///
    /// Stderr is unusable while the alternate screen is active, so logs
    /// are dropped unless a file is given.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::options().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args)?;

    let mut app = App::new();
    if args.no_snow {
        let _ = app.toggle_snow();
    }

    let frame_interval = Duration::from_millis(1000 / u64::from(args.fps));
    let driver = TerminalDriver::new(frame_interval)?;

    tracing::info!(fps = args.fps, "auraforge teaser starting");
    Ok(Runtime::new(driver, app).run().await?)
}
