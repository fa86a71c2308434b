//! Domain services.
//!
//! Each operation runs against one snapshot for one request: a read loads
//! it once, a mutation runs a single load→mutate→save cycle under the store
//! lock. No snapshot is cached across requests.

pub mod application;
pub mod identity;
pub mod job;
pub mod profile;

pub use application::ApplicationService;
pub use identity::IdentityService;
pub use job::JobService;
pub use profile::ProfileService;

/// Current date as a `YYYY-MM-DD` string, the persisted date format.
pub(crate) fn today() -> String {
    chrono::Utc::now().date_naive().to_string()
}
