//! HTTP façade for docmanager.
//!
//! This module maps the document API onto the record store. It owns no state
//! beyond a shared handle to the store.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | GET | `/` | admin page |
//! | POST | `/documents` | create |
//! | GET | `/documents/:number` | get |
//! | GET | `/documents/:number/download` | text export |
//! | PUT | `/documents/:number` | update summary |
//! | DELETE | `/documents/:number` | delete |

mod handlers;
mod page;
mod request_tracing;
pub mod response;

use std::future::Future;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, ServerConfig};
use crate::error::{Error, Result};
use crate::store::DocumentStore;

pub use response::ApiError;

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<DocumentStore>,
    max_body_bytes: usize,
}

impl AppState {
    /// Create state around a store, with the default body limit.
    #[must_use]
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self::from_config(store, &ServerConfig::default())
    }

    /// Create state around a store using the server configuration.
    #[must_use]
    pub fn from_config(store: Arc<DocumentStore>, config: &ServerConfig) -> Self {
        Self {
            store,
            max_body_bytes: config.max_body_bytes,
        }
    }

    /// The record store.
    #[must_use]
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/healthz", get(handlers::healthz_handler))
        .route("/documents", post(handlers::create_document_handler))
        .route(
            "/documents/:number",
            get(handlers::get_document_handler)
                .put(handlers::update_document_handler)
                .delete(handlers::delete_document_handler),
        )
        .route(
            "/documents/:number/download",
            get(handlers::download_document_handler),
        )
        .layer(from_fn(request_tracing::request_tracing_middleware))
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .with_state(state)
}

/// Bind the configured address.
///
/// # Errors
///
/// Returns [`Error::Bind`] if the address cannot be bound.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.bind_address();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::Bind { addr, source })
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("docmanager listening on http://{addr}");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("docmanager stopped");
    Ok(())
}

/// Resolve when the process receives SIGINT or SIGTERM (ctrl-c elsewhere).
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received");
}
