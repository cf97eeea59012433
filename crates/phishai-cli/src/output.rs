//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use phishai_core::AnalysisResult;

/// Print an analysis verdict.
pub fn print_analysis(result: &AnalysisResult) {
    println!();
    println!("{} {}", "Verdict:".bold(), colorize_prediction(&result.prediction));
    println!("{} {:.0}%", "Confidence:".bold(), result.confidence * 100.0);
    println!("{} {}", "URL:".bold(), result.url);
    println!("{} {}", "Host:".bold(), result.host);
    println!("{} {}", "Method:".bold(), result.method.dimmed());
    println!();
    println!("{}", result.explanation);

    if let Some(google) = &result.google_result {
        println!();
        println!("{} {}", "Google Safe Browsing:".bold(), google);
    }
    println!();
}

fn colorize_prediction(prediction: &str) -> ColoredString {
    match prediction.to_lowercase().as_str() {
        "phishing" | "malicious" => prediction.to_uppercase().red().bold(),
        "suspicious" => prediction.to_uppercase().yellow().bold(),
        "safe" | "legitimate" => prediction.to_uppercase().green().bold(),
        _ => prediction.normal(),
    }
}
