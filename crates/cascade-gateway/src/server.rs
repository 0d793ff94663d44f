// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.

use std::sync::Arc;
use std::time::Instant;

use axum::{routing::get, Router};
use cascade_core::CascadeError;
use cascade_iconfont::IconFontStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub catalogue: Arc<dyn IconFontStore>,
    /// Process start time for uptime reporting.
    pub start_time: Instant,
}

impl GatewayState {
    pub fn new(catalogue: Arc<dyn IconFontStore>) -> Self {
        Self {
            catalogue,
            start_time: Instant::now(),
        }
    }
}

/// Bind address for the gateway.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// All gateway routes with tracing and permissive CORS.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/fetch-icon-catalogue/", get(handlers::list_icon_fonts))
        .route("/fetch-icon-catalogue/{id}", get(handlers::fetch_icon_catalogue))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind `config.host:config.port` and serve until the process exits.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), CascadeError> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CascadeError::Gateway {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!(fonts = state.catalogue.list().len(), "gateway listening on {addr}");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| CascadeError::Gateway {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_iconfont::InMemoryIconFontStore;

    #[test]
    fn server_config_formats_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        assert_eq!(config.addr(), "127.0.0.1:3000");
    }

    #[tokio::test]
    async fn bind_failure_is_a_gateway_error() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let state = GatewayState::new(Arc::new(InMemoryIconFontStore::new()));
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
        };
        let err = start_server(&config, state).await.unwrap_err();
        assert!(matches!(err, CascadeError::Gateway { .. }));
        assert!(err.to_string().contains("failed to bind"));
    }
}
