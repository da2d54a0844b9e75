use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Dashboard service error variants.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("missing required fields: {}", fields.join(", "))]
    Validation { fields: Vec<&'static str> },
    #[error("a student with this email already exists")]
    DuplicateEmail,
    #[error("unknown query: {0}")]
    UnknownQuery(String),
    #[error("invalid query string")]
    InvalidQueryString,
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("storage unavailable")]
    StorageUnavailable(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl DashboardError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::UnknownQuery(_) => "UNKNOWN_QUERY",
            Self::InvalidQueryString => "INVALID_QUERY_STRING",
            Self::WriteFailed(_) => "WRITE_FAILED",
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidQueryString => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::UnknownQuery(_) => StatusCode::NOT_FOUND,
            Self::WriteFailed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(e) | Self::StorageUnavailable(e) => {
                tracing::error!(error = %e, kind = self.kind(), "request failed");
            }
            Self::WriteFailed(message) => {
                tracing::error!(error = %message, kind = self.kind(), "write failed");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
