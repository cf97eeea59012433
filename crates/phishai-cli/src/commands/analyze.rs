//! One-shot analysis command.

use anyhow::Result;
use clap::Args;
use phishai_core::analysis::{AnalysisProxy, ClassifierClient};
use phishai_core::{Config, ScanBody};
use tracing::info;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// URL or text to analyze
    pub input: String,

    /// Print the raw JSON result
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let proxy = AnalysisProxy::new(ClassifierClient::new(&config.ai_url));
    let result = proxy.analyze(&ScanBody::from_text(args.input)).await?;
    info!(
        prediction = %result.prediction,
        confidence = result.confidence,
        "Analysis finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_analysis(&result);
    }

    Ok(())
}
