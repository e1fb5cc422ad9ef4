use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pharmacy_locator::pharmacy::DEFAULT_RADIUS_M;
use pharmacy_locator::{
    Location, PharmacyLocator, PharmacyLocatorConfig, PharmacyRecord, PharmacySource, telemetry,
    web,
};

/// Fixed origin for the demo lookup
const DEMO_LATITUDE: f64 = 24.345_942;
const DEMO_LONGITUDE: f64 = 54.539_434;

#[derive(Parser)]
#[command(name = "pharmacy-locator", version, about = "Find pharmacies near a coordinate")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Look up pharmacies once and print them as JSON
    Demo {
        #[arg(long, default_value_t = DEMO_LATITUDE, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, default_value_t = DEMO_LONGITUDE, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, default_value_t = DEFAULT_RADIUS_M, allow_hyphen_values = true)]
        radius: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PharmacyLocatorConfig::load_from_path(cli.config)?;
    telemetry::init(&config.logging, cli.verbose);

    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            web::run(&config).await
        }
        Command::Demo { lat, lon, radius } => demo(&config, Location::new(lat, lon), radius).await,
    }
}

async fn demo(config: &PharmacyLocatorConfig, origin: Location, radius_m: i64) -> Result<()> {
    let locator = PharmacyLocator::from_config(config)?;
    let results = locator.nearby_pharmacies(origin, radius_m).await;

    println!("{}", render_demo_output(&results)?);
    Ok(())
}

fn render_demo_output(results: &[PharmacyRecord]) -> Result<String> {
    if results.is_empty() {
        return Ok("No pharmacies found nearby".to_string());
    }
    let json = serde_json::to_string_pretty(results).context("Failed to serialize pharmacies")?;
    Ok(format!("Pharmacies near you:\n{json}"))
}
