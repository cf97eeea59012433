//! SMS alert message composition.

const SIGNATURE: &str = "- EndPhishAI Security";
const UNKNOWN_URL: &str = "Unknown URL";

/// Threat level that selects the alert wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatLevel {
    Dangerous,
    Suspicious,
    Safe,
}

impl ThreatLevel {
    /// `phishing` and `malicious` are dangerous; anything unrecognized reads as safe.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_lowercase()).as_deref() {
            Some("phishing") | Some("malicious") => Self::Dangerous,
            Some("suspicious") => Self::Suspicious,
            _ => Self::Safe,
        }
    }
}

/// Render the alert text for `threat` about `url`.
pub fn compose_alert(threat: ThreatLevel, url: Option<&str>) -> String {
    let url = url.map(str::trim).filter(|u| !u.is_empty()).unwrap_or(UNKNOWN_URL);

    match threat {
        ThreatLevel::Dangerous => format!(
            "PHISHING ALERT!\nPhishAI detected a DANGEROUS link:\n{}\nDO NOT CLICK OR SHARE\nStay safe!\n{}",
            url, SIGNATURE
        ),
        ThreatLevel::Suspicious => format!(
            "SUSPICIOUS CONTENT\nPhishAI found suspicious patterns in:\n{}\nProceed with caution\n{}",
            url, SIGNATURE
        ),
        ThreatLevel::Safe => format!(
            "Content verified as safe by PhishAI.\nURL: {}\nStay vigilant!\n{}",
            url, SIGNATURE
        ),
    }
}
