use std::sync::Arc;

use bfly_store::StoreCell;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Butterfly ratings API server.
pub struct ButterflyServer {
    config: ServerConfig,
    state: AppState,
}

impl ButterflyServer {
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(StoreCell::new(config.db_path.clone()));
        Self {
            state: AppState::new(store),
            config,
        }
    }

    /// Use a prepared state instead of one built from the config.
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    ///
    /// The datastore is opened eagerly; if that fails the server still
    /// starts and each request retries the open.
    pub async fn serve(self) -> ServerResult<()> {
        if let Err(e) = self.state.store.initialize().await {
            warn!(error = %e, "datastore not available yet");
        }
        let app = build_router(self.state);
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        info!("Butterfly API started at http://{}", listener.local_addr()?);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bfly_store::{Document, DocumentStore};
    use tower::util::ServiceExt;

    #[test]
    fn server_construction() {
        let server = ButterflyServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:8000".parse().unwrap());
        assert!(!server.state.store.is_initialized());
    }

    #[tokio::test]
    async fn serve_on_taken_address_is_io_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            bind_addr: taken.local_addr().unwrap(),
            db_path: dir.path().join("missing.db.json"),
        };
        let err = ButterflyServer::new(config).serve().await.unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }

    #[tokio::test]
    async fn router_serves_prepared_state() {
        let store = Arc::new(DocumentStore::in_memory(Document::new()));
        let state = AppState::new(Arc::new(StoreCell::from_store(store)));
        let server = ButterflyServer::with_state(ServerConfig::default(), state);
        let response = server
            .router()
            .oneshot(Request::builder().uri("/butterflies").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
