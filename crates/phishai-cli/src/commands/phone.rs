//! Phone verification command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::debug;

#[derive(Args)]
pub struct VerifyPhoneArgs {
    /// Phone number in any common format
    pub number: String,
}

pub fn execute(args: VerifyPhoneArgs) -> Result<()> {
    let verification = phishai_core::sms::verify_phone(&args.number)?;
    debug!(valid = verification.valid, "Phone number checked");

    match &verification.formatted {
        Some(formatted) => println!("{} {}", "✓".green().bold(), formatted),
        None => println!("{} {}", "✗".red().bold(), verification.message),
    }

    Ok(())
}
