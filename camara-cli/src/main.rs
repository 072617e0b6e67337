//! Camara Gateway CLI

use anyhow::Result;
use camara_config::{load_config, load_or_default};
use camara_runtime::{Server, SignalHandler};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "camara")]
#[command(about = "Local gateway for the Chamber of Deputies open-data API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the gateway (start the server)
    Serve {
        /// Path to configuration file (built-in defaults when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log level override (trace, debug, info, warn, error)
        #[arg(short, long)]
        log_level: Option<String>,
    },

    /// Validate configuration file
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,
    },

    /// List the routes exposed by the gateway
    Routes,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, log_level } => {
            let config_path = config;
            let config = load_or_default(config_path.as_deref())?;

            // The flag wins over the configured level
            let level = log_level.unwrap_or_else(|| config.logging.level.clone());
            init_tracing(&level, &config.logging.format);

            tracing::info!("Starting Camara gateway");
            match &config_path {
                Some(path) => tracing::info!("Config file: {}", path.display()),
                None => tracing::info!("No config file given, using defaults"),
            }

            tracing::info!(
                listen = %config.server.listen,
                upstream = %config.upstream.base_url,
                "Configuration loaded"
            );

            let server = Server::new(config)?;

            let shutdown_signal = server.shutdown_signal();
            tokio::spawn(async move {
                let handler = SignalHandler::new(shutdown_signal);
                handler.run().await;
            });

            server.run().await?;

            tracing::info!("Server stopped");
            Ok(())
        }

        Commands::Validate { config } => {
            tracing_subscriber::fmt().with_target(false).init();

            tracing::info!("Validating configuration: {}", config.display());

            match load_config(&config) {
                Ok(cfg) => {
                    tracing::info!("✓ Configuration is valid");
                    tracing::info!("  Listen: {}", cfg.server.listen);
                    tracing::info!("  Upstream: {}", cfg.upstream.base_url);
                    tracing::info!("  Shutdown timeout: {:?}", cfg.server.shutdown_timeout);
                    tracing::info!("  Log level: {}", cfg.logging.level);
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("✗ Configuration validation failed: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Routes => {
            let routes = camara_router::catalog();

            println!("Routes exposed by the gateway ({}):", routes.len());
            let mut current = "";
            for route in routes {
                if route.category != current {
                    current = route.category;
                    println!("\n[{current}]");
                }
                println!("  GET {}", route.path);
                println!("      {}", route.description);
                if !route.query_params.is_empty() {
                    let names: Vec<&str> = route.query_params.iter().map(|p| p.name).collect();
                    println!("      params: {}", names.join(", "));
                }
            }
            Ok(())
        }

        Commands::Version => {
            println!("Camara Gateway");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
            Ok(())
        }
    }
}

fn init_tracing(level: &str, format: &str) {
    // RUST_LOG wins over the configured level when set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().json().with_target(false))
                .with(filter)
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    }
}
