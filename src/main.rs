//! Calculator HTTP service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id → trace → timeout → CORS → limits → metrics
//!                                                                  │
//!                                                                  ▼
//!                                                        form (num1, num2)
//!                                                                  │
//!                                                                  ▼
//!     Client Response                                  calc (add / subtract)
//!     ◀────────────── JSON envelope ◀── format (fixed / scientific)
//! ```

use std::path::PathBuf;

use clap::Parser;

use calc_service::config::{self, ServiceConfig};
use calc_service::lifecycle;
use calc_service::observability::logging;

#[derive(Parser)]
#[command(name = "calc-service")]
#[command(about = "Addition and subtraction over HTTP", long_about = None)]
struct Args {
    /// Path to a TOML config file. Built-in defaults are used when omitted.
    #[arg(short, long, env = "CALC_SERVICE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => {
            let config = ServiceConfig::default();
            config::validate_config(&config).map_err(config::ConfigError::Validation)?;
            config
        }
    };

    logging::init_logging(&config.observability);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?args.config,
        "calc-service starting"
    );

    lifecycle::start(config).await?;
    Ok(())
}
