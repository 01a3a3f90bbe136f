use crate::error::AppError;
use crate::models::{LoginRequest, LoginResponse};
use crate::state::AppState;
use axum::{Json, extract::State};
use session_client::SessionClient;

/// `POST /api/login` — one FIX logon attempt per request.
///
/// Opens a fresh transport, submits the Logon, and maps the session
/// outcome onto HTTP: authenticated → 200, rejected reply → 401,
/// timeout → 504, unreachable FIX server → 503. The transport is torn
/// down on every path; the session is never reused across requests.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let mut session = SessionClient::connect(&state.config.fix).await?;
    session
        .submit_logon(&payload.username, &payload.password)
        .await?;
    session.close();

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
    }))
}
