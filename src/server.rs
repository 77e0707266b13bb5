// ABOUTME: HTTP server assembly for the exercise tracker
// ABOUTME: Builds the axum router with middleware layers and serves it until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! Server assembly
//!
//! The storage collaborator is constructed by the caller and injected here;
//! the router owns no other shared state.

use crate::config::environment::ServerConfig;
use crate::database::ExerciseRepository;
use crate::handlers::ExerciseHandler;
use crate::middleware::{create_request_span, request_id_layers, setup_cors};
use crate::routes::{ExerciseRoutes, HealthRoutes};
use anyhow::{Context, Result};
use axum::{body::Body, Router};
use http::{Request, Response};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, Span};

/// Build the full application router over the given repository
pub fn build_router(repository: Arc<dyn ExerciseRepository>, config: &ServerConfig) -> Router {
    let (set_request_id, propagate_request_id) = request_id_layers();

    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| create_request_span(request))
        .on_response(|response: &Response<Body>, latency: Duration, span: &Span| {
            span.record("status_code", response.status().as_u16());
            span.record("duration_ms", latency.as_millis() as u64);
            info!("request completed");
        });

    Router::new()
        .merge(ExerciseRoutes::routes(ExerciseHandler::new(repository.clone())))
        .merge(HealthRoutes::routes(repository))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id)
                .layer(trace)
                .layer(propagate_request_id)
                .layer(setup_cors(config)),
        )
}

/// Bind the configured address and serve until Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(config: &ServerConfig, repository: Arc<dyn ExerciseRepository>) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    serve(listener, build_router(repository, config)).await
}

/// Serve `app` on an already bound listener until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listener address cannot be read or the server fails
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
