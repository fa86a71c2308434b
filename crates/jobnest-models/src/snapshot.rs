//! The persisted snapshot aggregate.

use serde::{Deserialize, Serialize};

use crate::application::Application;
use crate::job::Job;
use crate::user::{Role, User};

/// Full in-memory copy of all users, jobs, and applications for one
/// request's lifetime. The store owns the canonical collections; services
/// borrow a snapshot, mutate it, and write the whole document back.
///
/// Collection order is meaningful: jobs and applications are kept
/// most-recently-created first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub applications: Vec<Application>,
}

impl Snapshot {
    /// Look up a user by lowercased email.
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(email))
    }

    pub fn user_by_email_mut(&mut self, email: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.email.eq_ignore_ascii_case(email))
    }

    /// Look up a user by email, constrained to a role.
    pub fn user_with_role(&self, email: &str, role: Role) -> Option<&User> {
        self.user_by_email(email).filter(|u| u.role == role)
    }

    pub fn job_by_id(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn application_by_id_mut(&mut self, id: &str) -> Option<&mut Application> {
        self.applications.iter_mut().find(|a| a.id == id)
    }

    /// Whether `applicant_email` already applied to `job_id`.
    pub fn has_application(&self, job_id: &str, applicant_email: &str) -> bool {
        self.applications
            .iter()
            .any(|a| a.job_id == job_id && a.applicant_email == applicant_email)
    }

    /// Applications submitted by one student.
    pub fn applications_by_student(&self, email: &str) -> Vec<Application> {
        self.applications
            .iter()
            .filter(|a| a.applicant_email == email)
            .cloned()
            .collect()
    }

    /// Applications to any job posted by one recruiter.
    pub fn applications_for_recruiter(&self, email: &str) -> Vec<Application> {
        let posted: Vec<&str> = self
            .jobs
            .iter()
            .filter(|j| j.posted_by.eq_ignore_ascii_case(email))
            .map(|j| j.id.as_str())
            .collect();
        self.applications
            .iter()
            .filter(|a| posted.contains(&a.job_id.as_str()))
            .cloned()
            .collect()
    }
}
