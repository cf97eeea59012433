//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod alert;
pub mod analyze;
pub mod phone;
pub mod serve;

/// PhishAI - phishing analysis backend
#[derive(Parser)]
#[command(name = "phishai")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP backend
    Serve(serve::ServeArgs),

    /// Analyze a URL or a piece of text through the AI service
    Analyze(analyze::AnalyzeArgs),

    /// Validate and normalize a phone number
    VerifyPhone(phone::VerifyPhoneArgs),

    /// Send (or preview) an SMS threat alert
    Alert(alert::AlertArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = phishai_core::Config::from_env()?;

        match self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Analyze(args) => analyze::execute(args, &config).await,
            Commands::VerifyPhone(args) => phone::execute(args),
            Commands::Alert(args) => alert::execute(args, &config).await,
        }
    }
}
