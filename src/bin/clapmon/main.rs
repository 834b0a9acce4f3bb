//! clapmon - live double-clap monitor
//!
//! Run with: cargo run
//! Headless (log lines only): cargo run -- --headless
//!
//! Tuning can also come from `CLAPMON_THRESHOLD`, `CLAPMON_WINDOW_MS` and
//! `CLAPMON_COOLDOWN_MS`.

mod app;
mod args;
mod capture;
mod ui;

use app::Clapmon;
use args::Args;
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    Clapmon::new()
        .config(args.detector_config())
        .headless(args.headless)
        .run()
}
