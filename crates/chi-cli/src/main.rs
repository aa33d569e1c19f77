//! CHI CLI - Culture Heat Index
//!
//! Command-line entry point for the brand analysis API service.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Cli;

/// Initialize tracing from `RUST_LOG`, with a service default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "chi=info,chi_web=debug,chi_openai=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    Cli::parse().execute().await
}
