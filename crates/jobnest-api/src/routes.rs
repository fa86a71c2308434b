//! API routes.

use axum::middleware;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::error::ApiError;
use crate::handlers::applications::{apply_to_job, list_applications, update_application_status};
use crate::handlers::auth::{forgot_password, login, register};
use crate::handlers::health::health;
use crate::handlers::jobs::{create_job, list_jobs};
use crate::handlers::profile::update_profile;
use crate::middleware::{cors_layer, payload_too_large_body, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/forgot-password", post(forgot_password));

    let job_routes = Router::new()
        .route("/jobs", get(list_jobs).post(create_job))
        .route("/jobs/:job_id/apply", post(apply_to_job));

    let application_routes = Router::new()
        .route("/applications", get(list_applications))
        .route("/applications/:application_id", patch(update_application_status));

    let profile_routes = Router::new().route("/profile/:email", patch(update_profile));

    let health_routes = Router::new().route("/health", get(health));

    let api_routes = Router::new()
        .merge(health_routes)
        .merge(auth_routes)
        .merge(job_routes)
        .merge(application_routes)
        .merge(profile_routes);

    Router::new()
        .nest("/api", api_routes)
        .fallback(|| async { ApiError::not_found("Route not found.") })
        // Body size limit rejects oversized payloads before any domain logic
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::map_response(payload_too_large_body))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
