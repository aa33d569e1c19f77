//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod report;
pub mod serve;

/// Culture Heat Index - Brand Analysis API
#[derive(Parser)]
#[command(name = "chi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),

    /// Generate a report for a single brand and print it
    Report(report::ReportArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Report(args) => report::execute(args).await,
        }
    }
}
