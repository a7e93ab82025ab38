//! Example showing a few progress bar styles driven by a counted loop.
//!
//! Run with `RUST_LOG=spb=debug` to see the library's tracing output.

use color_eyre::Result;
use spb::{BarVariant, Color, ProgressBarBuilder, TimerVariant};
use std::thread::sleep;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Default options.
    let mut pb = ProgressBarBuilder::new().stop(300).build()?;
    for _ in pb.by_ref() {
        sleep(Duration::from_millis(5));
    }

    // A shorter, decreasing bar with a remaining time estimate.
    let mut pb = ProgressBarBuilder::new()
        .stop(300)
        .len_bar(25)
        .variant_bar(BarVariant::Decreasing)
        .variant_space(" ")
        .variant_timer(TimerVariant::Decreasing)
        .color(Color::Yellow)
        .variant_icon_timer("▁▂▃▄▅▆▇█▇▆▅▄▃▂▁")
        .end_msg("Complete.")
        .build()?;
    for _ in pb.by_ref() {
        sleep(Duration::from_millis(5));
    }

    // Starting part way through.
    let mut pb = ProgressBarBuilder::new()
        .start(150)
        .stop(500)
        .variant_bar(BarVariant::Increasing)
        .color(Color::Blue)
        .variant_icon_timer("⣾⣷⣯⣟⡿⢿⣻⣽")
        .timer_str("")
        .build()?;
    while pb.iteration() < pb.stop() {
        pb.advance()?;
        sleep(Duration::from_millis(5));
    }

    Ok(())
}
