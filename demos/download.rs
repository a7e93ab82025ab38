//! Example showing byte oriented progress while streaming an HTTP body.
//!
//! When the server announces the body size the bar counts bytes against it;
//! otherwise only the speed and the transferred bytes are shown.

use color_eyre::Result;
use futures::StreamExt;
use spb::{ProgressBarBuilder, Toggle};
use tracing_subscriber::EnvFilter;

const URL: &str = "https://httpbin.org/bytes/102400";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let url = std::env::args().nth(1).unwrap_or_else(|| URL.to_string());
    let response = reqwest::get(&url).await?.error_for_status()?;

    let total = response.content_length().filter(|&total| total > 0);
    let builder = match total {
        Some(total) => ProgressBarBuilder::new()
            .stop(i64::try_from(total)?)
            .len_bar(10)
            .timer_str("")
            .speed(Toggle::Show)
            .load(Toggle::Show)
            .end_msg(format!("{url} download complete.")),
        None => ProgressBarBuilder::unknown_total(),
    };
    let mut pb = builder.build()?;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        pb.add_loaded_bytes(chunk.len() as u64);
        if total.is_some() {
            pb.set_iteration(i64::try_from(pb.loaded_bytes)?.min(pb.stop()));
            pb.render()?;
        } else {
            pb.advance()?;
        }
    }

    // A counted bar ends its own line once it reaches the total.
    if total.is_none() || !pb.is_finished() {
        println!();
    }
    Ok(())
}
