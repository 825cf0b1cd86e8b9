//! Skycast CLI
//!
//! Terminal front end for the weather lookup widget.

#![allow(clippy::print_stdout)]

mod input;
mod render;

use std::{io::Write as _, path::PathBuf, sync::Arc};

use anyhow::Context as _;
use application::{LookupService, UnitPreferenceStore, ports::KeyValueStore};
use clap::{Parser, Subcommand};
use domain::TemperatureUnit;
use infrastructure::{
    AppConfig, GeocodingAdapter, WeatherAdapter, init_logging, open_store_or_memory,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::{
    input::{Command, HELP, parse_line},
    render::render_page,
};

/// Skycast CLI
#[derive(Parser)]
#[command(name = "skycast")]
#[command(author, version, about = "Current weather and forecast for any city", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "SKYCAST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one city and print the page
    Lookup {
        /// City name
        city: String,

        /// Unit for this lookup only (c or f)
        #[arg(short, long)]
        unit: Option<TemperatureUnit>,
    },

    /// Save the preferred temperature unit
    ///
    /// Example: skycast unit f
    Unit {
        /// c or f
        unit: TemperatureUnit,
    },

    /// Read city names from stdin until EOF or /quit (default)
    Interactive,
}

/// Log filter override from the verbosity count, `None` keeps the configured filter
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn open_store(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    open_store_or_memory(&config.storage.path)
}

fn build_service(config: &AppConfig) -> anyhow::Result<LookupService> {
    let geocoder = GeocodingAdapter::with_config(config.geocoding.clone())
        .context("failed to create geocoding client")?;
    let weather = WeatherAdapter::with_config(config.weather.clone())
        .context("failed to create weather client")?;

    Ok(LookupService::new(
        Arc::new(geocoder),
        Arc::new(weather),
        UnitPreferenceStore::new(open_store(config)),
    ))
}

fn print_page(service: &LookupService) {
    print!("{}", render_page(&service.page()));
}

async fn run_interactive(service: &LookupService) -> anyhow::Result<()> {
    print_page(service);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("stdin closed");
            break;
        };

        match parse_line(&line) {
            Command::Submit(city) => {
                service.submit(&city).await;
            },
            Command::SetUnit(unit) => {
                service.set_unit(unit);
            },
            Command::Help => {
                println!("{HELP}");
                continue;
            },
            Command::Quit => break,
        }

        print_page(service);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config =
        AppConfig::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Lookup { city, unit } => {
            let service = build_service(&config)?;
            if let Some(unit) = unit {
                service.override_unit(unit);
            }
            let phase = service.submit(&city).await;
            info!(%phase, "Lookup finished");
            print_page(&service);
        },

        Commands::Unit { unit } => {
            UnitPreferenceStore::new(open_store(&config))
                .set(unit)
                .context("failed to save unit preference")?;
            println!("Unit set to {}", unit.symbol());
        },

        Commands::Interactive => {
            let service = build_service(&config)?;
            run_interactive(&service).await?;
        },
    }

    Ok(())
}
