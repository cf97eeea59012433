//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use phishai_core::Config;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (defaults to $PORT or 5000)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to (defaults to $HOST or 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "logs/phishai.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs, config: Config) -> Result<()> {
    let host = args.host.unwrap_or_else(|| config.host.clone());
    let port = args.port.unwrap_or(config.port);
    let state = phishai_web::AppState::from_config(&config)?;

    println!();
    println!("  {} {}", "PhishAI".cyan().bold(), "Backend".bold());
    println!();
    println!("  {}          http://{}:{}/api", "API".green(), host, port);
    println!("  {}   {}", "AI service".green(), config.ai_url);
    println!(
        "  {}          {}",
        "SMS".green(),
        if config.sms.is_some() { "configured".normal() } else { "not configured".yellow() }
    );
    println!("  {}         {}", "Mode".green(), config.mode.as_str());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    phishai_web::run_server(state, &host, port).await?;

    Ok(())
}
