//! HTTP API server for the text analysis service.
//!
//! Provides a liveness probe and a word/character counting endpoint, with
//! structured logging (tracing) and optional Prometheus metrics.

pub mod config;
pub mod error;
pub mod observer;
pub mod routes;

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use error::ApiError;
use observer::{AnalysisObserver, TracingObserver};
use routes::analyze::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<O: AnalysisObserver>(state: Arc<AppState<O>>) -> Router {
    let router = Router::new()
        .route("/health", get(routes::health::check))
        .route("/analyze", post(routes::analyze::analyze::<O>))
        .method_not_allowed_fallback(routes::fallback::method_not_allowed)
        .fallback(routes::fallback::not_found)
        .layer(DefaultBodyLimit::disable())
        .with_state(state);

    with_layers(router)
}

/// Creates the default application state, reporting through `tracing` and `metrics`.
pub fn create_default_state() -> Arc<AppState<TracingObserver>> {
    Arc::new(AppState {
        observer: TracingObserver,
    })
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(error = %detail, "handler panicked");
    ApiError::Internal(detail).into_response()
}
