use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use task_tracker_api::{app::cors_layer, config::AppConfig, AppState};

#[derive(Parser, Debug)]
#[command(name = "task-tracker-api")]
#[command(about = "Personal task tracker HTTP API")]
#[command(version)]
struct Args {
    #[arg(long, help = "Interface to bind (overrides API_HOST)")]
    host: Option<String>,

    #[arg(long, help = "Port to listen on (overrides API_PORT / PORT)")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }
    info!("Starting Task Tracker API in {:?} mode", config.environment);
    debug!(config = %serde_json::to_string(&config)?, "Effective configuration");

    let state = AppState::from_config(&config)
        .await
        .context("failed to initialize storage")?;

    let mut router = task_tracker_api::app(state);
    if let Some(cors) = cors_layer(&config.security) {
        router = router.layer(cors);
    }

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Task Tracker API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
