//! CLI argument parsing and the pause flow.

pub mod args;
pub mod pause;

use anyhow::{Context, Result};
use args::Cli;
use colored::Colorize;
use dialoguer::Password;
use pihole_core::PiholeError;

use crate::config::{Config, Settings};

/// Run the CLI application with already parsed arguments.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, &config)?;

    let password = match cli.password {
        Some(password) => password,
        None => read_password()?,
    };

    pause::execute(&settings, &password).await?;

    println!(
        "{} blocking disabled for {}",
        "✓".green().bold(),
        settings.duration.to_string().cyan()
    );

    Ok(())
}

/// HTTP status the appliance answered with, if the failure carries one.
pub fn status_code(err: &anyhow::Error) -> Option<u16> {
    err.downcast_ref::<PiholeError>()
        .and_then(PiholeError::status_code)
}

/// Prompt for the password on the terminal without echo.
fn read_password() -> Result<String> {
    Password::new()
        .with_prompt("Enter pi-hole password")
        .allow_empty_password(true)
        .interact()
        .context("couldn't read password")
}
