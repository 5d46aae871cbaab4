//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phish_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping the run outcome to a process exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use phish_audit::initialization::init_logger_with;
use phish_audit::{run_audit, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let fail_on = config.fail_on;
    match run_audit(config).await {
        Ok(summary) => {
            let code = summary.exit_code(fail_on);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("phish_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
