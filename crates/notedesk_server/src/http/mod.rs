//! JSON/HTTP endpoint layer.
//!
//! # Responsibility
//! - Map routes onto note service operations.
//! - Translate `NoteNotFound` into 404, creation into 201, other successes
//!   into 200.
//!
//! # Invariants
//! - No business logic lives here beyond request-shape validation.

pub mod dto;
pub mod error;
mod handlers;

use crate::state::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use log::{info, warn};
use std::time::Instant;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/notes/{id}",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = started_at.elapsed().as_millis();
    if status.is_server_error() {
        warn!(
            "event=http_request module=http status=error method={method} path={path} code={} duration_ms={duration_ms}",
            status.as_u16()
        );
    } else {
        info!(
            "event=http_request module=http status=ok method={method} path={path} code={} duration_ms={duration_ms}",
            status.as_u16()
        );
    }
    response
}
