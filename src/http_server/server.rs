//! # HTTP Server
//!
//! Serves the data API over HTTP: the data endpoint plus health and
//! metrics routes, with CORS applied across all of them.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::api::ApiHandler;
use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::data_routes::{data_routes, DataState};
use super::observability_routes::observability_routes;

/// HTTP server for the data API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server for the given handler
    pub fn new(config: HttpServerConfig, handler: ApiHandler) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, handler: ApiHandler) -> Router {
        let metrics = handler.metrics();
        let state = Arc::new(DataState::new(handler));

        // No configured origins means any origin is allowed
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(observability_routes(metrics))
            .merge(data_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid listen address: {e}"),
            )
        })?;

        let addr_str = addr.to_string();
        Logger::info("SERVER_STARTING", &[("addr", addr_str.as_str())]);

        let listener = TcpListener::bind(addr).await?;
        Logger::info("SERVER_LISTENING", &[("addr", addr_str.as_str())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
