//! SMS alert command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use phishai_core::sms::{compose_alert, PhoneNumber, SmsAlerter, ThreatLevel, TwilioGateway};
use phishai_core::Config;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Args)]
pub struct AlertArgs {
    /// Destination phone number
    pub number: String,

    /// Threat label: phishing, malicious, suspicious or safe
    #[arg(long, default_value = "phishing")]
    pub threat: String,

    /// URL the alert is about
    #[arg(long)]
    pub url: Option<String>,

    /// Print the message without sending it
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn execute(args: AlertArgs, config: &Config) -> Result<()> {
    if args.dry_run {
        let to = PhoneNumber::parse(&args.number)?;
        let body = compose_alert(ThreatLevel::from_label(Some(args.threat.as_str())), args.url.as_deref());
        println!("{} {}", "To:".bold(), to);
        println!("{}", body);
        println!("\n{}", "(dry run - nothing sent)".dimmed());
        info!(to = %to, "Dry run, SMS not sent");
        return Ok(());
    }

    let credentials = config.sms.as_ref().ok_or_else(|| {
        anyhow::anyhow!(
            "SMS service is not configured.\n\
             Set TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN and TWILIO_PHONE_NUMBER."
        )
    })?;

    let alerter = SmsAlerter::new(Arc::new(TwilioGateway::new(credentials)?));
    let receipt = alerter
        .send_alert(&args.number, Some(args.threat.as_str()), args.url.as_deref())
        .await
        .map_err(|e| {
            error!(error = %e, "SMS alert failed");
            anyhow::anyhow!("{}: {}", e.user_message(), e)
        })?;
    info!(sid = %receipt.sid, to = %receipt.to, "SMS alert sent from CLI");

    println!("{} SMS sent to {} (sid: {})", "✓".green().bold(), receipt.to, receipt.sid);
    Ok(())
}
