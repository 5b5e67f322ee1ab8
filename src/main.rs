//! sentipipe - batch sentiment-annotation pipeline

use clap::Parser;
use sentipipe::{Config, core};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sentipipe", version, about = "Annotate a database table with sentiment labels and scores")]
struct Cli {
    /// Path to the YAML configuration file; falls back to SENTIPIPE_*
    /// environment variables when omitted
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Skip the terminal distribution charts
    #[arg(long)]
    no_charts: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Pick up a local .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match load_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match core::pipeline::run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn load_config(cli: &Cli) -> sentipipe::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    if cli.no_charts {
        config.output.charts = false;
    }

    Ok(config)
}
