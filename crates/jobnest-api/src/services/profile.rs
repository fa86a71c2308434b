//! Profile service: email-keyed partial updates.

use jobnest_models::SanitizedUser;

use crate::error::ApiResult;
use crate::services::identity::{IdentityService, ProfilePatch};

/// Thin contract over the identity service. The inbound key is an email
/// path segment, already percent-decoded by routing; it still has to be
/// lowercased before lookup.
#[derive(Clone)]
pub struct ProfileService {
    identity: IdentityService,
}

impl ProfileService {
    pub fn new(identity: IdentityService) -> Self {
        Self { identity }
    }

    /// Apply a partial update to the user addressed by `email`.
    pub async fn update(&self, email: &str, patch: ProfilePatch) -> ApiResult<SanitizedUser> {
        let email = email.trim().to_lowercase();
        self.identity.update_profile(&email, patch).await
    }
}
