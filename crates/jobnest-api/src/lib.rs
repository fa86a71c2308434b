//! Axum HTTP API server.
//!
//! This crate provides:
//! - The `/api` REST surface of the JobNest marketplace
//! - Domain services for identity, jobs, applications, and profiles
//! - Centralized configuration and domain defaults
//! - CORS, request-body limiting, and request logging

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::{ApiConfig, DomainDefaults};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{ApplicationService, IdentityService, JobService, ProfileService};
pub use state::AppState;
