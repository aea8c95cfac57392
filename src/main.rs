//! Paiwan translation HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use paiwan::config::Config;
use paiwan::embedding::TextEmbedder;
use paiwan::fallback::ContextFallback;
use paiwan::gateway::{AppState, HEALTH_PATH, create_router_with_state};
use paiwan::resolver::Translator;
use paiwan::vectordb::QdrantSearch;
use paiwan::vocabulary::load_word_pairs;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        tie_policy = config.tie_policy.as_str(),
        "Paiwan translation service starting"
    );

    let pairs = match load_word_pairs(&config.vocabulary_path) {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::warn!("Failed to load vocabulary: {}. Starting empty.", e);
            Vec::new()
        }
    };

    let embedder = TextEmbedder::load(config.embedder_config())?;

    let search = QdrantSearch::new(&config.qdrant_url)?;
    match search.collection_exists(&config.collection_name).await {
        Ok(true) => tracing::info!(collection = %config.collection_name, "Context collection ready"),
        Ok(false) => tracing::warn!(
            collection = %config.collection_name,
            "Context collection missing; fallback lookups will miss"
        ),
        Err(e) => tracing::warn!("Context search unreachable: {}. Fallback degraded.", e),
    }

    let fallback = Arc::new(ContextFallback::new(
        embedder,
        search,
        config.fallback_config(),
    ));
    let translator = Translator::from_pairs(&pairs, fallback, config.tie_policy);

    let app = create_router_with_state(AppState::new(Arc::new(translator)));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Paiwan translation service shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let port = std::env::var("PAIWAN_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);

    let url = format!("http://127.0.0.1:{}{}", port, HEALTH_PATH);

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
