//! MedBot web server.
//!
//! Usage:
//!   cargo run -p medbot-web
//!   cargo run -p medbot-web -- --port 8080 --catalog my-catalog.toml

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use medbot_catalog::KeywordRouter;
use medbot_web::{build_router, AppState, DEFAULT_SERVICE_NAME};

/// MedBot browser chat demo.
#[derive(Parser)]
#[command(name = "medbot-web", about = "MedBot browser chat demo")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Answer from this TOML catalog instead of the builtin one.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Name reported by GET /health.
    #[arg(long, default_value = DEFAULT_SERVICE_NAME)]
    service_name: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let router = match KeywordRouter::load(args.catalog.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("medbot-web error: {}", e);
            std::process::exit(1);
        }
    };
    info!(rules = router.rules().len(), "response catalog loaded");

    let app = build_router(Arc::new(AppState::new(router, args.service_name)));

    let addr = format!("{}:{}", args.host, args.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("medbot-web error: cannot bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!(%addr, "MedBot web interface listening");
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("medbot-web error: {}", e);
        std::process::exit(1);
    }
}
