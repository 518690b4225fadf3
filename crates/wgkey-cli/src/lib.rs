//! show-pubkey - compute a WireGuard public key from a private key
//!
//! The crate is split into:
//! - `cli`: argument parsing and the derive-and-print command
//! - `output`: text, JSON and quiet renderings of the public key

pub mod cli;
pub mod output;

#[cfg(test)]
mod proptests;

pub use cli::Cli;
pub use output::{OutputFormat, OutputFormatter};

/// Exit codes for CLI operations
///
/// Every failure exits with status 1; the variants exist so callers can
/// tell input errors from unexpected ones in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Public key printed
    Success,
    /// Unexpected failure, e.g. stdout closed
    GeneralError,
    /// Missing argument, bad hex, wrong key length or bad options
    InvalidInput,
}

impl ExitCode {
    /// Numeric process status
    pub fn status(self) -> u8 {
        match self {
            ExitCode::Success => 0,
            ExitCode::GeneralError | ExitCode::InvalidInput => 1,
        }
    }

    /// Convert to process exit code
    pub fn to_exit_code(self) -> std::process::ExitCode {
        std::process::ExitCode::from(self.status())
    }

    /// Get the exit code name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ExitCode::Success => "SUCCESS",
            ExitCode::GeneralError => "GENERAL_ERROR",
            ExitCode::InvalidInput => "INVALID_INPUT",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        i32::from(code.status())
    }
}
