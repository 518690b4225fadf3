//! CLI definition and the derive-and-print command

use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;
use wgkey_crypto::{derive_public_key_hex, KeyError};

use crate::output::{OutputFormat, OutputFormatter};
use crate::ExitCode;

/// Usage text printed when the private key argument is missing
pub const USAGE: &str = "Usage: show-pubkey <private-key-hex>\n\
                         Computes the WireGuard public key from a private key\n";

/// show-pubkey - compute a WireGuard public key from a private key
#[derive(Parser, Debug)]
#[command(name = "show-pubkey")]
#[command(version, about = "Computes the WireGuard public key from a private key")]
pub struct Cli {
    /// Private key as 64 hex characters (32 bytes)
    #[arg(value_name = "PRIVATE_KEY_HEX")]
    pub private_key: Option<String>,

    /// Output format: text, json, quiet
    #[arg(long, default_value = "text")]
    pub output: OutputFormat,

    /// Verbose output (info logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Debug logs on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Log filter directive derived from the flags
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    /// The positional private key, or [`KeyError::MissingArgument`]
    pub fn private_key_hex(&self) -> Result<&str, KeyError> {
        self.private_key.as_deref().ok_or(KeyError::MissingArgument)
    }

    /// Derive the public key and write it to `stdout`.
    ///
    /// Validation failures are reported on `stderr` and nothing is written to
    /// `stdout`. Only I/O failures surface as `Err`.
    pub fn execute<O: Write, E: Write>(
        &self,
        stdout: &mut O,
        stderr: &mut E,
    ) -> anyhow::Result<ExitCode> {
        let formatter = OutputFormatter::new(self.output);

        let result = self.private_key_hex().and_then(|input| {
            tracing::debug!(input_len = input.len(), "decoding private key");
            derive_public_key_hex(input)
        });

        match result {
            Ok(public_key) => {
                tracing::info!(public_key = %public_key, format = %formatter.format(), "derived public key");
                stdout.write_all(formatter.format_public_key(&public_key).as_bytes())?;
                stdout.flush()?;
                Ok(ExitCode::Success)
            }
            Err(KeyError::MissingArgument) => {
                tracing::debug!("no private key argument");
                stderr.write_all(USAGE.as_bytes())?;
                Ok(ExitCode::InvalidInput)
            }
            Err(e) => {
                tracing::debug!(error = %e, "private key rejected");
                writeln!(stderr, "Error: {e}")?;
                Ok(ExitCode::InvalidInput)
            }
        }
    }
}

/// Print a clap parse failure and pick the exit code.
///
/// `--help` and `--version` go to `stdout` and succeed; every other parse
/// error goes to `stderr` and exits with status 1 rather than clap's 2.
pub fn report_parse_error<O: Write, E: Write>(
    err: &clap::Error,
    stdout: &mut O,
    stderr: &mut E,
) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{}", err.render());
            ExitCode::Success
        }
        _ => {
            let _ = write!(stderr, "{}", err.render());
            ExitCode::InvalidInput
        }
    }
}
