//! Applications linking students to jobs.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a status string is not one of the four known values.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid application status: {0}")]
pub struct ParseStatusError(pub String);

/// Application lifecycle status.
///
/// Transitions are unconstrained among the four values; no terminal state is
/// enforced. The set itself is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interviewing,
    Offered,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Interviewing => "Interviewing",
            ApplicationStatus::Offered => "Offered",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Applied" => Ok(ApplicationStatus::Applied),
            "Interviewing" => Ok(ApplicationStatus::Interviewing),
            "Offered" => Ok(ApplicationStatus::Offered),
            "Rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// One student's application to one job.
///
/// At most one application exists per (job, applicant email) pair. Created
/// once on apply, mutated only through status updates, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    /// Captured from the user at apply time, lowercased.
    pub applicant_email: String,
    pub applicant_name: String,
    pub status: ApplicationStatus,
    /// Submission date, `YYYY-MM-DD`.
    pub applied_at: String,
}

impl Application {
    /// Generate a new application id.
    pub fn new_id() -> String {
        format!("app-{}", Uuid::new_v4())
    }
}
