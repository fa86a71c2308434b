//! Application state.

use std::sync::Arc;

use jobnest_store::SnapshotStore;

use crate::config::ApiConfig;
use crate::services::{ApplicationService, IdentityService, JobService, ProfileService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<SnapshotStore>,
    pub identity: IdentityService,
    pub jobs: JobService,
    pub applications: ApplicationService,
    pub profile: ProfileService,
}

impl AppState {
    /// Create new application state over the configured snapshot file.
    pub fn new(config: ApiConfig) -> Self {
        let store = Arc::new(SnapshotStore::new(&config.store_path));
        let defaults = Arc::new(config.defaults.clone());

        let identity = IdentityService::new(Arc::clone(&store), Arc::clone(&defaults));
        let jobs = JobService::new(Arc::clone(&store), Arc::clone(&defaults));
        let applications = ApplicationService::new(Arc::clone(&store));
        let profile = ProfileService::new(identity.clone());

        Self {
            config,
            store,
            identity,
            jobs,
            applications,
            profile,
        }
    }
}
