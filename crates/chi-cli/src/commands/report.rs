//! One-shot report command.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use chi_core::prompt;
use chi_core::report::normalize_report;
use chi_openai::ChatClient;

#[derive(Args)]
pub struct ReportArgs {
    /// Brand to analyze
    pub brand: String,

    /// Print the report as a single line instead of pretty JSON
    #[arg(long)]
    pub compact: bool,
}

pub async fn execute(args: ReportArgs) -> Result<()> {
    if args.brand.trim().is_empty() {
        bail!("brand required");
    }

    let client = ChatClient::from_env()?;

    // Status goes to stderr so stdout stays pipeable JSON.
    eprintln!(
        "{} Generating report for: {} ({})",
        "ℹ".blue().bold(),
        args.brand.cyan(),
        client.model()
    );

    let reply = client
        .complete(prompt::SYSTEM_PROMPT, &prompt::user_prompt(&args.brand))
        .await?;
    let report = normalize_report(&reply, &args.brand);

    let rendered = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{rendered}");

    Ok(())
}
