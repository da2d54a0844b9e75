use axum::{extract::State, http::StatusCode};

use academy_core::health::db_readiness;

use crate::state::AppState;

/// Handler for `GET /readyz`: `200` once Postgres answers, `503` otherwise.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    db_readiness(&state.db).await
}
