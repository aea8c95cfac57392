//! Test server harness.

use paiwan::embedding::{EmbedderConfig, TextEmbedder, placeholder_embedding};
use paiwan::fallback::{ContextFallback, FallbackConfig};
use paiwan::fuzzy::TiePolicy;
use paiwan::gateway::{AppState, create_router_with_state};
use paiwan::resolver::Translator;
use paiwan::vectordb::MockContextSearch;
use paiwan::vocabulary::WordPair;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::fixtures::{EMBEDDING_DIM, TEST_COLLECTION_NAME, sample_pairs};

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

pub type MockFallback = ContextFallback<TextEmbedder, MockContextSearch>;

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub pairs: Vec<WordPair>,
    /// `(query, content)` documents indexed under the query's placeholder vector.
    pub documents: Vec<(String, String)>,
    pub backend_unavailable: bool,
    pub tie_policy: TiePolicy,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            pairs: sample_pairs(),
            documents: Vec::new(),
            backend_unavailable: false,
            tie_policy: TiePolicy::default(),
        }
    }
}

impl TestServerConfig {
    pub fn document(mut self, query: &str, content: impl Into<String>) -> Self {
        self.documents.push((query.to_string(), content.into()));
        self
    }

    pub fn backend_unavailable(mut self) -> Self {
        self.backend_unavailable = true;
        self
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub fallback: Arc<MockFallback>,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn search_calls(&self) -> usize {
        self.fallback.search_backend().search_calls()
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Spawns a server with a stub embedder and an in-memory context search.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let local_addr = listener.local_addr()?;

    let search = MockContextSearch::new();
    for (query, content) in &config.documents {
        search.insert(
            TEST_COLLECTION_NAME,
            placeholder_embedding(query, EMBEDDING_DIM),
            content.clone(),
        );
    }
    search.set_unavailable(config.backend_unavailable);

    let embedder = TextEmbedder::load(EmbedderConfig::stub().embedding_dim(EMBEDDING_DIM))
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let fallback = Arc::new(ContextFallback::new(
        embedder,
        search,
        FallbackConfig::default().collection_name(TEST_COLLECTION_NAME),
    ));
    let translator = Translator::from_pairs(&config.pairs, fallback.clone(), config.tie_policy);

    let app = create_router_with_state(AppState::new(Arc::new(translator)));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        fallback,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
