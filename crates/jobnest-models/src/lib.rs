//! Shared data models for the JobNest backend.
//!
//! This crate provides Serde-serializable types for:
//! - User accounts and roles
//! - Job postings
//! - Applications and their status lifecycle
//! - The persisted snapshot aggregate
//!
//! Serialization uses camelCase keys to stay wire- and disk-compatible with
//! the existing `db.json` layout.

pub mod application;
pub mod job;
pub mod snapshot;
pub mod user;

// Re-export common types
pub use application::{Application, ApplicationStatus, ParseStatusError};
pub use job::Job;
pub use snapshot::Snapshot;
pub use user::{Role, SanitizedUser, User};
