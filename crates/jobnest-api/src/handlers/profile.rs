//! Profile handler: partial updates keyed by email.

use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiResult;
use crate::handlers::auth::UserResponse;
use crate::services::identity::ProfilePatch;
use crate::state::AppState;

/// PATCH /api/profile/{email}
pub async fn update_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(patch): Json<ProfilePatch>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.profile.update(&email, patch).await?;
    Ok(Json(UserResponse { user }))
}
