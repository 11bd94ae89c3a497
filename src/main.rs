//! # weatherdb server
//!
//! ## Environment Variables
//!
//! - `MONGO_URI`: MongoDB connection string
//! - `RUST_LOG`: log filter (defaults to `info`)

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use weatherdb::cli::{self, Mode, Options};
use weatherdb::config::Config;
use weatherdb::db::Connector;
use weatherdb::errors::StartupError;
use weatherdb::handlers;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Loads configuration, connects, and either exits or serves.
async fn run(options: Options) -> Result<(), StartupError> {
    let config = match &options.env_file {
        Some(path) => Config::from_env_file(path)?,
        None => Config::from_env(),
    };

    let connector = Connector::initialize(&config).await?;

    if options.mode == Mode::Check {
        info!("connection check passed");
        return Ok(());
    }

    handlers::build(connector)
        .launch()
        .await
        .map_err(Box::new)?;

    Ok(())
}

#[rocket::main]
async fn main() -> ExitCode {
    init_tracing();

    match run(cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // connection failures were already logged by the connector
            if !matches!(e, StartupError::Connect(_)) {
                error!(error = %e, "startup failed");
            }
            e.exit_code()
        }
    }
}
