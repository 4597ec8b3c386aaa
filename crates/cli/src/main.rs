//! Caseproof CLI - keyword evidence search over extracted assessment text.
//!
//! Usage:
//!   caseproof search --query "homebound skilled" oasis.txt referral.txt
//!   caseproof search --query "wound care" --top-k 3 --json notes.txt
//!   caseproof keywords "Is the patient homebound?"
//!
//! Input files are plain text with pages separated by form feeds, as
//! written by PDF-to-text tools.

mod commands;
mod output;

use clap::Parser;
use commands::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "caseproof=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::run(&cli) {
        Ok(out) => {
            print!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
