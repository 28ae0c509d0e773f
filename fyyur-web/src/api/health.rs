//! Liveness and database readiness for the booking site
//!
//! `GET /health` answers with the service name, the crate version and the
//! schema version recorded in the booking database. An unreachable database
//! turns the answer into a 503 so a load balancer stops routing page traffic.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use fyyur_common::db;
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok", or "unavailable" when the database cannot be read
    pub status: String,
    pub module: String,
    pub version: String,
    /// Applied schema version; absent when the database is unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<i64>,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, label, schema_version) = match db::schema_version(&state.db).await {
        Ok(v) => (StatusCode::OK, "ok", Some(v)),
        Err(e) => {
            warn!("Health check could not read the booking database: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable", None)
        }
    };

    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            module: "fyyur-web".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            schema_version,
        }),
    )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
