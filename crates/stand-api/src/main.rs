//! Stand API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p stand-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use stand_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("stand-api: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        "Configuration loaded"
    );

    stand_api::run(config).await?;

    Ok(())
}
