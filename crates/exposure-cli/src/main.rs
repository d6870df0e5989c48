mod evaluate;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use exposure_core::FilterMode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "exposure-cli")]
#[command(about = "Evaluate delivery-tab store exposure for a candidate snapshot")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Evaluate and rank a candidates file, printing the response as JSON
    Evaluate {
        /// YAML or JSON file with `candidates` and optional `ads`
        file: PathBuf,
        /// Pickup filter state: `pickup-off` or `pickup-on`
        #[arg(long, default_value = "pickup-off")]
        filter: FilterMode,
        /// Evaluate as of this RFC 3339 instant instead of the system clock
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
        /// Dispatch center of the requester's delivery zone
        #[arg(long, requires_all = ["lat", "lng"])]
        center: Option<String>,
        /// Requester latitude
        #[arg(long, requires = "center", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Requester longitude
        #[arg(long, requires = "center", allow_negative_numbers = true)]
        lng: Option<f64>,
        /// Pretty-print the JSON response
        #[arg(long)]
        pretty: bool,
    },
    /// Print the effective policy configuration
    Config,
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = exposure_core::load_policy_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Evaluate {
            file,
            filter,
            at,
            center,
            lat,
            lng,
            pretty,
        }) => {
            let args = evaluate::EvaluateArgs {
                file,
                filter,
                at,
                delivery: evaluate::delivery_context(center, lat, lng),
                pretty,
            };
            let output = evaluate::run_evaluate(config, args)?;
            println!("{output}");
        }
        Some(Commands::Config) => println!("{config:#?}"),
        None => println!("exposure-cli: run with --help for usage"),
    }

    Ok(())
}
