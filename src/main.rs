//! mvc-router
//!
//! Resolves request paths such as `/widgets/list/42` to a
//! namespace/controller/action triple plus positional arguments, and serves
//! the resolved actions over HTTP.
//!
//! ```text
//!     Client Request
//!     ─────────────▶ http::server ──▶ app::Application ──▶ routing::Router
//!                                          │                    │
//!                                          │◀── ResolvedRoute ──┘
//!                                          ▼
//!                                   callback / controller
//!     Client Response                      │
//!     ◀────────────── http::response ◀─────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use mvc_router::lifecycle::{startup, Shutdown};
use mvc_router::observability::logging;
use mvc_router::routing::RouteDefaults;
use mvc_router::{AppConfig, Application, HttpServer};

#[derive(Parser)]
#[command(name = "mvc-router")]
#[command(about = "Path router for controller/action web applications", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve HTTP requests
    Serve,
    /// Show how a path resolves
    Resolve {
        /// Request path, e.g. /widgets/list/42
        path: String,
    },
    /// List routes in evaluation order
    Routes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = startup::load(cli.config.as_deref())?;
    logging::init_logging(&config.observability.log_level);
    tracing::info!(
        path = ?cli.config,
        routes = config.routes.len(),
        "Configuration loaded"
    );

    let application = startup::build_application(&config)?;

    match cli.command {
        Commands::Serve => serve(config, application).await?,
        Commands::Resolve { path } => match application.resolve(&path) {
            Some(route) => println!("{}", serde_json::to_string_pretty(&route)?),
            None => {
                eprintln!("No route matches {path}");
                std::process::exit(1);
            }
        },
        Commands::Routes => {
            for (index, route) in application.router().routes().iter().enumerate() {
                println!("{index:>3}  {:<32} {}", route.pattern, describe(&route.defaults));
            }
        }
    }

    Ok(())
}

async fn serve(config: AppConfig, application: Application) -> Result<(), Box<dyn std::error::Error>> {
    startup::start_metrics(&config)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, Arc::new(application));
    server.run(listener, shutdown.subscribe().with_ctrl_c()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn describe(defaults: &RouteDefaults) -> String {
    let show = |value: &Option<String>| value.as_deref().unwrap_or("-").to_string();
    format!(
        "namespace={} controller={} action={}",
        show(&defaults.namespace),
        show(&defaults.controller),
        show(&defaults.action)
    )
}
