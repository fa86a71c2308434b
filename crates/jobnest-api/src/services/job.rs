//! Job service: listing and creation.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use jobnest_models::{Job, Role};
use jobnest_store::SnapshotStore;

use crate::config::DomainDefaults;
use crate::error::{ApiError, ApiResult};
use crate::services::today;

/// Job creation request body. `posted_by` names the recruiter; everything
/// else describes the posting.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateJobRequest {
    pub posted_by: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub company_image: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub founded: Option<String>,
    pub website: Option<String>,
    pub company_overview: Option<String>,
    pub benefits: Option<Vec<String>>,
}

/// Owns the Job entity.
#[derive(Clone)]
pub struct JobService {
    store: Arc<SnapshotStore>,
    defaults: Arc<DomainDefaults>,
}

impl JobService {
    pub fn new(store: Arc<SnapshotStore>, defaults: Arc<DomainDefaults>) -> Self {
        Self { store, defaults }
    }

    /// All jobs, most-recently-created first.
    pub async fn list(&self) -> ApiResult<Vec<Job>> {
        let db = self.store.load().await?;
        Ok(db.jobs)
    }

    /// Create a job posting. The poster must be an existing recruiter.
    /// Company fields come from the request when supplied, otherwise they
    /// are copied from the recruiter's profile at creation time.
    pub async fn create(&self, request: CreateJobRequest) -> ApiResult<Job> {
        let posted_by = request
            .posted_by
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        let defaults = Arc::clone(&self.defaults);
        let job = self
            .store
            .update(move |db| {
                let recruiter = db
                    .user_with_role(&posted_by, Role::Recruiter)
                    .ok_or_else(|| ApiError::forbidden("Only recruiter accounts can post jobs."))?;
                let recruiter_email = recruiter.email.clone();
                let recruiter_company = recruiter.company_name.clone();
                let recruiter_image = recruiter.company_image.clone();

                let title = required(request.title, "title")?;
                let location = required(request.location, "location")?;
                let salary = required(request.salary, "salary")?;
                let job_type = required(request.job_type, "type")?;
                let description = required(request.description, "description")?;

                let job = Job {
                    id: Job::new_id(),
                    title,
                    company: request
                        .company
                        .filter(|c| !c.trim().is_empty())
                        .unwrap_or(recruiter_company),
                    company_image: request
                        .company_image
                        .filter(|i| !i.is_empty())
                        .unwrap_or(recruiter_image),
                    location,
                    salary,
                    job_type,
                    description,
                    industry: request.industry.unwrap_or_else(|| defaults.industry.clone()),
                    company_size: request
                        .company_size
                        .unwrap_or_else(|| defaults.company_size.clone()),
                    founded: request.founded.unwrap_or_else(|| defaults.founded.clone()),
                    website: request.website.unwrap_or_default(),
                    company_overview: request.company_overview.unwrap_or_default(),
                    benefits: request.benefits.unwrap_or_default(),
                    posted_by: recruiter_email,
                    posted_at: today(),
                };

                db.jobs.insert(0, job.clone());
                Ok::<_, ApiError>(job)
            })
            .await?;

        info!(job_id = %job.id, posted_by = %job.posted_by, "Created job");
        Ok(job)
    }
}

/// Require a non-blank field, naming it in the error.
fn required(value: Option<String>, field: &str) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::validation(format!("{field} is required."))),
    }
}
