use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use book_reader::ReadError;
use serde_json::json;
use session_client::SessionError;
use thiserror::Error;

/// Central error type for the gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, "UNAUTHORIZED"),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            AppError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg, "GATEWAY_TIMEOUT"),
            AppError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, msg, "SERVICE_UNAVAILABLE")
            }
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                "INTERNAL_ERROR",
            ),
        };

        let body = Json(json!({
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}

/// Read-model failures are opaque to clients; the detail is logged
/// server-side and a generic 500 goes out.
impl From<ReadError> for AppError {
    fn from(err: ReadError) -> Self {
        tracing::error!(error = %err, "read model failure");
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::AuthenticationFailed => {
                AppError::Unauthorized("Login failed".to_string())
            }
            SessionError::Timeout => AppError::GatewayTimeout("Login timed out".to_string()),
            SessionError::Transport(e) => {
                tracing::error!(error = %e, "FIX transport failure");
                AppError::ServiceUnavailable("Login service unreachable".to_string())
            }
            other => AppError::InternalError(anyhow::Error::new(other)),
        }
    }
}
