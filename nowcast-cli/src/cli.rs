use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use nowcast_core::{Config, WeatherClient, render, render_failure};
use tracing::warn;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nowcast", version, about = "Current weather conditions in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key in the config file.
    Configure,

    /// Show current conditions for a location.
    Show {
        /// Location name or free-text query, e.g. "Paris" or "90210".
        /// Prompted for interactively when omitted.
        location: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location } => show(location).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key from prompt")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(location: Option<String>) -> anyhow::Result<()> {
    let location = match location {
        Some(location) => location,
        None => Text::new("Location:").prompt().context("Failed to read location from prompt")?,
    };

    let config = Config::load()?;
    let client = WeatherClient::new(config.api_key()?);

    // A failed fetch is rendered like any other outcome, never swallowed.
    let output = match client.current(&location).await {
        Ok(payload) => render(&payload),
        Err(err) => {
            warn!(%err, "fetch failed");
            render_failure(&err)
        }
    };

    println!("{output}");

    Ok(())
}
