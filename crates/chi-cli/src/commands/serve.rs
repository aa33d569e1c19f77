//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use chi_openai::ChatClient;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let client = ChatClient::from_env()?;

    println!();
    println!("  {} {}", "CHI".cyan().bold(), "API Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}/",
        "Liveness".green(),
        args.host,
        args.port
    );
    println!(
        "  {}    http://{}:{}/api/chi/report",
        "Report".green(),
        args.host,
        args.port
    );
    println!("  {}     {}", "Model".green(), client.model());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    chi_web::run_server(client, &args.host, args.port).await?;

    Ok(())
}
