//! pihole-pause - temporarily disable Pi-hole blocking
//!
//! Logs in with the web interface password and turns DNS blocking off for
//! a while.

use clap::Parser;
use pihole_cli::cli::args::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    pihole_cli::logging::init(cli.verbose);

    match pihole_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match pihole_cli::cli::status_code(&err) {
                Some(status) => tracing::error!(status, "{err:#}"),
                None => tracing::error!("{err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
