//! Storefront Probe
//!
//! Runs the product service behind the timing interceptor and the
//! lifecycle logger.
//!
//! # Architecture Overview
//!
//! ```text
//!     caller
//!       │
//!       ▼
//!  ┌────────────────────────┐     ┌──────────┐     ┌──────────────┐
//!  │ ObservedProductService │     │          │     │   tracing    │
//!  │  ┌──────────────────┐  │────▶│ LogSink  │────▶│  subscriber  │
//!  │  │ TimingInterceptor│  │     │          │     └──────────────┘
//!  │  │  LifecycleLogger │  │     └──────────┘
//!  │  └──────────────────┘  │
//!  └──────────┬─────────────┘
//!             ▼
//!  ┌──────────────────────┐
//!  │   ProductService     │
//!  │ (e.g. in-memory)     │
//!  └──────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use storefront_probe::catalog::{observe, InMemoryCatalog, NewProduct, ProductService};
use storefront_probe::config::{load_config, AppConfig};
use storefront_probe::interception::TracingSink;
use storefront_probe::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "storefront-probe")]
#[command(about = "Timing and lifecycle logging for the product service", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run sample calls through the observed product service
    Demo,
    /// Validate the configuration and print the effective settings
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Check => {
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        Commands::Demo => run_demo(&config),
    }
}

fn run_demo(config: &AppConfig) -> anyhow::Result<()> {
    logging::init_logging(&config.observability)?;

    tracing::info!(
        pointcut = %config.interception.pointcut,
        timing = config.interception.timing_enabled,
        lifecycle = config.interception.lifecycle_enabled,
        "storefront-probe v0.1.0 starting"
    );

    if config.observability.metrics_enabled {
        let addr = config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .context("parsing metrics address")?;
        metrics::init_metrics(addr)?;
    }

    let catalog = InMemoryCatalog::new().with_product(NewProduct::named("Widget").into_product(42));
    let service = observe(catalog, &config.interception, Arc::new(TracingSink))?;

    let product = service.get_product(42)?;
    tracing::info!(product = %product, "Fetched product");

    if let Err(e) = service.delete_product(7) {
        tracing::warn!(error = %e, "Delete failed as expected");
    }

    let created = service.create_product(NewProduct {
        name: "Gadget".into(),
        description: "A second sample product".into(),
        price_cents: 1_999,
        stock: 3,
    })?;
    service.update_product(created.id, NewProduct::named("Gadget Pro"))?;
    let all = service.list_products()?;
    tracing::info!(count = all.len(), "Demo complete");

    Ok(())
}
