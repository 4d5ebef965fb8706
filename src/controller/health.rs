//! Health and readiness endpoints.
//!
//! Used by the hosting platform to keep the bot process alive and to check that the
//! database is reachable.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::time::Instant;

use crate::state::AppState;

/// Readiness report returned by `/readyz`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReadinessDto {
    pub ready: bool,
    pub database: bool,
    /// Round trip of the database ping in milliseconds.
    pub latency_ms: u64,
}

/// GET / - Reports that the server is running
pub async fn root() -> &'static str {
    "Server online"
}

/// GET /ping - Plain connectivity check
pub async fn ping() -> &'static str {
    "Pong!"
}

/// GET /livez - Liveness probe
///
/// Answers as long as the process can serve requests, without touching the database.
pub async fn livez() -> &'static str {
    "Live!"
}

/// GET /readyz - Readiness probe
///
/// # Returns
/// - `200 OK`: Database reachable
/// - `503 Service Unavailable`: Database ping failed
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let (status, report) = check_readiness(&state.db).await;

    (status, Json(report))
}

/// Pings the database and builds the readiness report.
pub async fn check_readiness(db: &DatabaseConnection) -> (StatusCode, ReadinessDto) {
    let started = Instant::now();
    let database = match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            false
        }
    };
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let status = if database {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        ReadinessDto {
            ready: database,
            database,
            latency_ms,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    #[tokio::test]
    async fn ready_when_database_reachable() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (status, report) = check_readiness(db).await;

        assert_eq!(status, StatusCode::OK);
        assert!(report.ready);
        assert!(report.database);
    }

    /// Tests readiness after the connection pool was closed.
    ///
    /// Expected: 503 with database reported as down
    #[tokio::test]
    async fn unavailable_when_database_closed() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.clone().unwrap();
        db.clone().close().await.unwrap();

        let (status, report) = check_readiness(&db).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!report.ready);
        assert!(!report.database);
    }

    #[tokio::test]
    async fn static_probes_answer() {
        assert_eq!(root().await, "Server online");
        assert_eq!(ping().await, "Pong!");
        assert_eq!(livez().await, "Live!");
    }
}
