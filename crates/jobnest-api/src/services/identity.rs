//! Identity service: registration, login, password reset, profile updates.

use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use tracing::info;

use jobnest_models::{Role, SanitizedUser, User};
use jobnest_store::SnapshotStore;

use crate::config::DomainDefaults;
use crate::error::{ApiError, ApiResult};

/// Registration request body. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub company_name: Option<String>,
    pub company_image: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub resume: Option<String>,
}

/// Login request body. `role` is part of the credential tuple.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub company_name: Option<String>,
}

/// Password reset request body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
    pub new_password: Option<String>,
}

/// Partial profile update. Only present fields are applied; `resume`
/// distinguishes an absent field from an explicit null.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    #[serde(deserialize_with = "present_or_null")]
    pub resume: Option<Option<String>>,
    pub company_image: Option<String>,
    pub company_name: Option<String>,
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Owns the User entity.
#[derive(Clone)]
pub struct IdentityService {
    store: Arc<SnapshotStore>,
    defaults: Arc<DomainDefaults>,
}

impl IdentityService {
    pub fn new(store: Arc<SnapshotStore>, defaults: Arc<DomainDefaults>) -> Self {
        Self { store, defaults }
    }

    /// Register a new account. Email is normalized to trimmed lowercase and
    /// must be unique case-insensitively. Any role value other than
    /// `"recruiter"` registers a student.
    pub async fn register(&self, request: RegisterRequest) -> ApiResult<SanitizedUser> {
        let email = request
            .email
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let password = request.password.unwrap_or_default();
        let role = Role::from_signup(request.role.as_deref());

        if email.is_empty() || password.is_empty() {
            return Err(ApiError::validation("Email and password are required."));
        }

        let defaults = Arc::clone(&self.defaults);
        let user = self
            .store
            .update(move |db| {
                if db.user_by_email(&email).is_some() {
                    return Err(ApiError::DuplicateEmail);
                }

                let company_name = request
                    .company_name
                    .as_deref()
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                if role == Role::Recruiter && company_name.is_empty() {
                    return Err(ApiError::validation("Company name is required for recruiters."));
                }

                let name = request
                    .name
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

                let user = User {
                    id: User::new_id(),
                    name,
                    email,
                    role,
                    company_name: match role {
                        Role::Recruiter => company_name,
                        Role::Student => String::new(),
                    },
                    company_image: match role {
                        Role::Recruiter => request
                            .company_image
                            .filter(|i| !i.is_empty())
                            .unwrap_or_else(|| defaults.company_image.clone()),
                        Role::Student => String::new(),
                    },
                    // Comparison-ready credential; production must hash here
                    // without changing the external contract.
                    password,
                    bio: request.bio.unwrap_or_default(),
                    skills: request.skills.unwrap_or_default(),
                    resume: request.resume,
                };

                db.users.push(user.clone());
                Ok(user)
            })
            .await?;

        info!(email = %user.email, role = %user.role, "Registered user");
        Ok(user.sanitized())
    }

    /// Authenticate against the exact (email, password, role) tuple.
    /// Recruiters additionally need a case-insensitive company name match.
    pub async fn login(&self, request: LoginRequest) -> ApiResult<SanitizedUser> {
        let email = request
            .email
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let password = request.password.unwrap_or_default();
        let role: Role = request
            .role
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|_| ApiError::invalid_credentials("Invalid email, role, or password."))?;
        let company_name = request
            .company_name
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string();

        let db = self.store.load().await?;
        let user = db
            .users
            .iter()
            .find(|u| {
                u.email.eq_ignore_ascii_case(&email) && u.password == password && u.role == role
            })
            .ok_or_else(|| ApiError::invalid_credentials("Invalid email, role, or password."))?;

        if role == Role::Recruiter && !user.company_name.eq_ignore_ascii_case(&company_name) {
            return Err(ApiError::invalid_credentials(
                "Recruiter login requires correct company name.",
            ));
        }

        Ok(user.sanitized())
    }

    /// Overwrite the password of an existing account.
    pub async fn reset_password(&self, request: ForgotPasswordRequest) -> ApiResult<()> {
        let email = request
            .email
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let new_password = request.new_password.unwrap_or_default();

        let logged_email = email.clone();
        self.store
            .update(move |db| {
                let user = db
                    .user_by_email_mut(&email)
                    .ok_or_else(|| ApiError::not_found("No account found with that email."))?;

                if new_password.len() < 6 {
                    return Err(ApiError::validation(
                        "New password must be at least 6 characters.",
                    ));
                }

                user.password = new_password;
                Ok(())
            })
            .await?;

        info!(email = %logged_email, "Password reset");
        Ok(())
    }

    /// Apply a partial update restricted to the mutable profile fields.
    /// `email` must already be lowercased.
    pub async fn update_profile(&self, email: &str, patch: ProfilePatch) -> ApiResult<SanitizedUser> {
        let email = email.to_string();
        let user = self
            .store
            .update(move |db| {
                let user = db
                    .user_by_email_mut(&email)
                    .ok_or_else(|| ApiError::not_found("User not found."))?;

                if let Some(name) = patch.name {
                    user.name = name;
                }
                if let Some(bio) = patch.bio {
                    user.bio = bio;
                }
                if let Some(skills) = patch.skills {
                    user.skills = skills;
                }
                if let Some(resume) = patch.resume {
                    user.resume = resume;
                }
                if let Some(company_image) = patch.company_image {
                    user.company_image = company_image;
                }
                if let Some(company_name) = patch.company_name {
                    user.company_name = company_name;
                }

                Ok::<_, ApiError>(user.clone())
            })
            .await?;

        Ok(user.sanitized())
    }
}
