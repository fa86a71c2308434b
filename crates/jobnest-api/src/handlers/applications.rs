//! Application handlers: apply, role-scoped listing, status patch.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use jobnest_models::Application;

use crate::error::ApiResult;
use crate::services::application::ApplyRequest;
use crate::state::AppState;

/// Application list wrapper.
#[derive(Serialize)]
pub struct ApplicationsResponse {
    pub applications: Vec<Application>,
}

/// Single application wrapper.
#[derive(Serialize)]
pub struct ApplicationResponse {
    pub application: Application,
}

/// Query string for GET /api/applications.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationsQuery {
    pub role: Option<String>,
    pub email: Option<String>,
}

/// Status patch body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatusUpdateRequest {
    pub status: Option<String>,
}

/// POST /api/jobs/{job_id}/apply
pub async fn apply_to_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Json(request): Json<ApplyRequest>,
) -> ApiResult<(StatusCode, Json<ApplicationResponse>)> {
    let application = state.applications.apply(&job_id, request).await?;
    Ok((StatusCode::CREATED, Json(ApplicationResponse { application })))
}

/// GET /api/applications?role=&email=
pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ApplicationsQuery>,
) -> ApiResult<Json<ApplicationsResponse>> {
    let applications = state
        .applications
        .list(
            query.role.as_deref().unwrap_or_default(),
            query.email.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(Json(ApplicationsResponse { applications }))
}

/// PATCH /api/applications/{application_id}
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> ApiResult<Json<ApplicationResponse>> {
    let application = state
        .applications
        .update_status(&application_id, request.status.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(ApplicationResponse { application }))
}
