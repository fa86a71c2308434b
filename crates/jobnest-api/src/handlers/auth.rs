//! Auth handlers: register, login, forgot-password.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use jobnest_models::SanitizedUser;

use crate::error::ApiResult;
use crate::services::identity::{ForgotPasswordRequest, LoginRequest, RegisterRequest};
use crate::state::AppState;

/// Sanitized user wrapper, the shape every auth success returns.
#[derive(Serialize)]
pub struct UserResponse {
    pub user: SanitizedUser,
}

/// Plain message wrapper.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state.identity.register(request).await?;
    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.identity.login(request).await?;
    Ok(Json(UserResponse { user }))
}

/// POST /api/auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state.identity.reset_password(request).await?;
    Ok(Json(MessageResponse {
        message: "Password reset successful.".to_string(),
    }))
}
