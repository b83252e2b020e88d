//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

/// Response for GET /healthz.
#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

/// Handle GET /healthz.
///
/// Answers without touching the content source.
pub(crate) async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
