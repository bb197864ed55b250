use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod capture;
mod cli;
mod error;
mod eth;
mod render;

use capture::TapSource;
use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries decoded frames
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_filter().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut source = TapSource::open(&args.interface).context("open TAP device")?;
    let stdout = tokio::io::stdout();

    capture::until_interrupted(
        capture::run(&mut source, stdout, args.buffer_size.into()),
        tokio::signal::ctrl_c(),
    )
    .await
    .with_context(|| format!("capture on {}", args.interface))
}
