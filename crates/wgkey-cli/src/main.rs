//! show-pubkey entry point

use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wgkey_cli::cli::report_parse_error;
use wgkey_cli::{Cli, ExitCode};

fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, &mut io::stdout(), &mut io::stderr()).to_exit_code(),
    };

    // Logs go to stderr; stdout carries only the key
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::new(cli.log_level()))
        .init();

    let stdout = io::stdout();
    match cli.execute(&mut stdout.lock(), &mut io::stderr()) {
        Ok(code) => code.to_exit_code(),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::GeneralError.to_exit_code()
        }
    }
}
