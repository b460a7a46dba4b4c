use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_health_contracts::{HealthService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    /// `null` for channels that are not configured
    telegram: Option<bool>,
    email: Option<bool>,
}

async fn health(service: State<Arc<impl HealthService>>) -> Response {
    let status = service.get_status().await;

    let code = if status.ok() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let HealthStatus { telegram, email } = status;
    let response = HealthResponse {
        http: true,
        telegram,
        email,
    };

    (code, Json(response)).into_response()
}
