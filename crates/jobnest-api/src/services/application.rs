//! Application service: apply, role-scoped listing, status transitions.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use jobnest_models::{Application, ApplicationStatus, Role};
use jobnest_store::SnapshotStore;

use crate::error::{ApiError, ApiResult};
use crate::services::today;

/// Apply request body. Identity is the supplied applicant email.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplyRequest {
    pub applicant_email: Option<String>,
}

/// Owns the Application entity.
#[derive(Clone)]
pub struct ApplicationService {
    store: Arc<SnapshotStore>,
}

impl ApplicationService {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }

    /// Submit an application. The applicant must be a student, the job must
    /// exist, and the (job, applicant) pair must be new.
    pub async fn apply(&self, job_id: &str, request: ApplyRequest) -> ApiResult<Application> {
        let applicant_email = request
            .applicant_email
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let job_id = job_id.to_string();

        let application = self
            .store
            .update(move |db| {
                let student = db
                    .user_with_role(&applicant_email, Role::Student)
                    .ok_or_else(|| ApiError::forbidden("Only student accounts can apply."))?;
                let student_email = student.email.clone();
                let student_name = student.name.clone();

                if db.job_by_id(&job_id).is_none() {
                    return Err(ApiError::not_found("Job not found."));
                }

                if db.has_application(&job_id, &student_email) {
                    return Err(ApiError::DuplicateApplication);
                }

                let application = Application {
                    id: Application::new_id(),
                    job_id,
                    applicant_email: student_email,
                    applicant_name: student_name,
                    status: ApplicationStatus::Applied,
                    applied_at: today(),
                };

                db.applications.insert(0, application.clone());
                Ok(application)
            })
            .await?;

        info!(
            application_id = %application.id,
            job_id = %application.job_id,
            "Submitted application"
        );
        Ok(application)
    }

    /// Applications visible to one role: students see their own, recruiters
    /// see applications to the jobs they posted.
    pub async fn list(&self, role: &str, email: &str) -> ApiResult<Vec<Application>> {
        let email = email.to_lowercase();
        let db = self.store.load().await?;

        match role {
            "student" => Ok(db.applications_by_student(&email)),
            "recruiter" => Ok(db.applications_for_recruiter(&email)),
            _ => Err(ApiError::validation("role query must be student or recruiter.")),
        }
    }

    /// Overwrite an application's status with one of the four known values.
    pub async fn update_status(&self, application_id: &str, status: &str) -> ApiResult<Application> {
        let application_id = application_id.to_string();
        let status = status.to_string();

        let application = self
            .store
            .update(move |db| {
                let application = db
                    .application_by_id_mut(&application_id)
                    .ok_or_else(|| ApiError::not_found("Application not found."))?;

                let status: ApplicationStatus = status
                    .parse()
                    .map_err(|_| ApiError::validation("Invalid status."))?;

                application.status = status;
                Ok::<_, ApiError>(application.clone())
            })
            .await?;

        info!(
            application_id = %application.id,
            status = %application.status,
            "Updated application status"
        );
        Ok(application)
    }
}
