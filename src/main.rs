use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use flightcast::client::{ApiClient, Airport};
use flightcast::config::Config;
use flightcast::store::FlightDelayStore;

#[derive(Parser)]
#[command(name = "flightcast", about = "Query a flight-delay prediction service")]
struct Cli {
    /// Override the service base URL (also: FLIGHTCAST_API_BASE_URL).
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all airports known to the service.
    Airports,
    /// Show the busiest airports by flight volume.
    Top {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Search airports by name, city, or state.
    Search { query: String },
    /// Predict delay likelihood for an airport on a date.
    Predict {
        /// Airport identifier, as reported by `airports`.
        #[arg(long)]
        airport: i64,
        /// ISO date, e.g. 2024-05-01.
        #[arg(long)]
        date: String,
    },
    /// Check whether the prediction service is up.
    Health,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}

fn print_airports(airports: &[Airport]) {
    for airport in airports {
        println!(
            "{:>6}  {:<40} {:<20} {:<2}  {:>9} flights  {:>5.1}% delayed",
            airport.airport_id,
            airport.airport_name,
            airport.city,
            airport.state,
            airport.total_flights,
            airport.delay_rate * 100.0
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(url) = cli.base_url {
        config.api.base_url = url;
    }

    let client = ApiClient::new(&config.api);
    let store = FlightDelayStore::new(client.clone());

    match cli.command {
        Command::Airports => {
            store.load_airports().await;
            let state = store.snapshot();
            if let Some(err) = state.error {
                bail!(err);
            }
            print_airports(&state.airports);
        }
        Command::Top { limit } => {
            let airports = client.top_airports(limit).await?;
            print_airports(&airports);
        }
        Command::Search { query } => {
            let airports = store.search_airports(&query).await;
            if airports.is_empty() {
                println!("no matches");
            } else {
                print_airports(&airports);
            }
        }
        Command::Predict { airport, date } => {
            store.load_airports().await;
            let state = store.snapshot();
            if let Some(err) = state.error {
                bail!(err);
            }

            let selected = state
                .airports
                .iter()
                .find(|a| a.airport_id == airport)
                .cloned()
                .with_context(|| format!("unknown airport id {}", airport))?;

            store.select_airport(selected);
            store.set_date(date);
            store.predict_delay().await;

            let state = store.snapshot();
            if let Some(err) = state.error {
                bail!(err);
            }
            let prediction = state
                .prediction
                .as_ref()
                .context("service returned no prediction")?;

            let risk = state.risk_level();
            println!(
                "{} ({}, {})",
                prediction.airport_info.airport_name,
                prediction.airport_info.city,
                prediction.airport_info.state
            );
            println!(
                "delay probability: {}%  (confidence {:.2})",
                state.delay_probability_percent(),
                prediction.confidence
            );
            println!("risk: {} [{}]", risk, risk.color());
        }
        Command::Health => {
            store.check_api_health().await;
            match store.snapshot().api_healthy {
                Some(true) => println!("healthy"),
                _ => {
                    bail!("service is unreachable or unhealthy");
                }
            }
        }
    }

    Ok(())
}
