//! Output formatting for the derived public key
//!
//! Three formats are supported:
//! - Text: the labelled hex and base64 lines (default)
//! - JSON: one object for scripting
//! - Quiet: the base64 key alone, as `wg pubkey` prints it

use std::str::FromStr;

use serde::Serialize;
use wgkey_crypto::PublicKey;

/// Label on the hex line, padded so both values line up.
pub const HEX_LABEL: &str = "Public Key (hex):    ";
/// Label on the base64 line.
pub const BASE64_LABEL: &str = "Public Key (base64): ";

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Labelled hex and base64 lines
    #[default]
    Text,
    /// JSON object
    Json,
    /// Base64 key only
    Quiet,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Quiet => write!(f, "quiet"),
        }
    }
}

/// JSON shape of a derived key
#[derive(Debug, Serialize)]
pub struct PublicKeyOutput {
    pub public_key_hex: String,
    pub public_key_base64: String,
}

impl From<&PublicKey> for PublicKeyOutput {
    fn from(key: &PublicKey) -> Self {
        Self {
            public_key_hex: key.to_hex(),
            public_key_base64: key.to_base64(),
        }
    }
}

/// Renders a public key in the selected format
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render the complete output, trailing newline included.
    pub fn format_public_key(&self, key: &PublicKey) -> String {
        match self.format {
            OutputFormat::Text => format!(
                "{HEX_LABEL}{}\n{BASE64_LABEL}{}\n",
                key.to_hex(),
                key.to_base64()
            ),
            OutputFormat::Json => format!("{}\n", self.to_json(&PublicKeyOutput::from(key))),
            OutputFormat::Quiet => format!("{}\n", key.to_base64()),
        }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> String {
        serde_json::to_string(value).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
