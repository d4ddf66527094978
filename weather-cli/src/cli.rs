use anyhow::Context;
use clap::{Parser, Subcommand};
use cityweather_core::{
    Config, DisplaySurface, OpenWeatherService, WeatherQuery, WeatherService, render,
};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use std::sync::Arc;

use crate::surface::TerminalSurface;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Log request and classification details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show current weather for a city once.
    Show {
        /// City name; prompted for when omitted.
        city: Option<String>,
    },

    /// Keep prompting for cities until the prompt is cancelled.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => {
                let session = Session::from_config(Config::load()?)?;
                let city = match city {
                    Some(city) => city,
                    None => match prompt_city()? {
                        Some(city) => city,
                        None => return Ok(()),
                    },
                };

                let mut surface = TerminalSurface::new(std::io::stdout());
                session.lookup(&city, &mut surface).await;
                Ok(())
            }
            Command::Interactive => {
                let session = Session::from_config(Config::load()?)?;
                let mut surface = TerminalSurface::new(std::io::stdout());

                while let Some(city) = prompt_city()? {
                    session.lookup(&city, &mut surface).await;
                }
                Ok(())
            }
        }
    }
}

/// Service plus the key every query is sent with.
struct Session {
    service: Arc<dyn WeatherService>,
    api_key: String,
}

impl Session {
    fn from_config(config: Config) -> anyhow::Result<Self> {
        let api_key = config.api_key_from_env();
        if api_key.is_empty() {
            tracing::debug!("no API key configured; the endpoint will reject the request");
        }

        Ok(Self {
            service: Arc::new(OpenWeatherService::from_config(&config)?),
            api_key,
        })
    }

    /// One query, one render. Query failures are shown, never returned.
    async fn lookup(&self, city: &str, surface: &mut dyn DisplaySurface) {
        let query = WeatherQuery::new(city, self.api_key.as_str());
        let result = self.service.fetch_weather(&query).await;
        render(&result, surface);
    }
}

/// `Ok(None)` when the user cancels the prompt.
fn prompt_city() -> anyhow::Result<Option<String>> {
    match Text::new("Enter city name:").prompt() {
        Ok(city) => Ok(Some(city)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Failed to read city name"),
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!(
        "Saved API key to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}
