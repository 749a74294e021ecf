// src/main.rs
mod analysis;
mod jquants;
mod lookup;
mod report;
mod utils;
mod workflow;

use clap::{Parser, Subcommand};
use jquants::client::JQuantsClient;
use lookup::CsvTickerDirectory;
use utils::config::{Config, DEFAULT_BASE_URL, DEFAULT_LISTINGS_PATH};
use utils::AppError;

/// Valuation reports (PER/PBR) built from J-Quants statements and daily quotes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the financial-data API
    #[arg(long, global = true, env = "JQUANTS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Listings CSV (code,name,market,industry) used to resolve security names and codes.
    /// The bundled default is a small sample; point this at a full JPX listing export
    #[arg(long, global = true, env = "TSE_LISTINGS_PATH", default_value = DEFAULT_LISTINGS_PATH)]
    listings: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Statements with disclosure-day close and PER
    Per {
        /// Security name or code
        security: String,
    },
    /// Statements with PER/PBR plus high/low PER over the latest period
    PerPbr {
        /// Security name or code
        security: String,
    },
    /// Print the id token and the raw statements response
    Statements {
        /// Security code
        #[arg(short, long, default_value = "7832")]
        code: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Pick up a .env file if present, then setup logging (reads RUST_LOG)
    let dotenv = dotenvy::dotenv();
    utils::logging::setup_logging();
    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env file: {}", e),
    }

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    let config = Config::new(&args.base_url, &args.listings);
    let api = JQuantsClient::new(&config.base_url)?;
    let mut stdout = std::io::stdout().lock();

    match &args.command {
        Command::Per { security } => {
            let directory = open_directory(&config)?;
            workflow::run_per(&api, &directory, config.refresh_token.as_ref(), security, &mut stdout).await
        }
        Command::PerPbr { security } => {
            let directory = open_directory(&config)?;
            workflow::run_per_pbr(&api, &directory, config.refresh_token.as_ref(), security, &mut stdout).await
        }
        Command::Statements { code } => {
            workflow::run_statements(&api, config.refresh_token.as_ref(), code, &mut stdout).await
        }
    }
}

fn open_directory(config: &Config) -> Result<CsvTickerDirectory, AppError> {
    CsvTickerDirectory::open(&config.listings_path).map_err(|e| {
        AppError::Config(format!(
            "Could not load listings from {}: {}",
            config.listings_path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let args = Args::try_parse_from(["jquants_valuation", "per-pbr", "7832"]).unwrap();
        assert!(matches!(args.command, Command::PerPbr { ref security } if security == "7832"));

        let args = Args::try_parse_from(["jquants_valuation", "statements"]).unwrap();
        assert!(matches!(args.command, Command::Statements { ref code } if code == "7832"));

        let args = Args::try_parse_from([
            "jquants_valuation",
            "per",
            "トヨタ自動車",
            "--listings",
            "/tmp/listings.csv",
        ])
        .unwrap();
        assert_eq!(args.listings, "/tmp/listings.csv");
        assert!(matches!(args.command, Command::Per { .. }));
    }

    #[test]
    fn test_security_argument_is_required() {
        assert!(Args::try_parse_from(["jquants_valuation", "per"]).is_err());
    }
}
