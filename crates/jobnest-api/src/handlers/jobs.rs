//! Job handlers: listing and creation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use jobnest_models::Job;

use crate::error::ApiResult;
use crate::services::job::CreateJobRequest;
use crate::state::AppState;

/// Job list wrapper.
#[derive(Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
}

/// Single job wrapper.
#[derive(Serialize)]
pub struct JobResponse {
    pub job: Job,
}

/// GET /api/jobs
pub async fn list_jobs(State(state): State<AppState>) -> ApiResult<Json<JobsResponse>> {
    let jobs = state.jobs.list().await?;
    Ok(Json(JobsResponse { jobs }))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> ApiResult<(StatusCode, Json<JobResponse>)> {
    let job = state.jobs.create(request).await?;
    Ok((StatusCode::CREATED, Json(JobResponse { job })))
}
