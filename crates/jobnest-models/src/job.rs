//! Job postings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A job posting.
///
/// Company fields are copied from the recruiter's profile at creation time
/// (a snapshot, not a live reference), unless the creating request supplies
/// overrides. `posted_by` always references an existing recruiter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub company_image: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub description: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub founded: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company_overview: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Recruiter email, lowercased.
    pub posted_by: String,
    /// Creation date, `YYYY-MM-DD`.
    pub posted_at: String,
}

impl Job {
    /// Generate a new job id.
    pub fn new_id() -> String {
        format!("job-{}", Uuid::new_v4())
    }
}
