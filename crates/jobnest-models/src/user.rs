//! User accounts and roles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role. Part of the login credential tuple, not just a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Recruiter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Recruiter => "recruiter",
        }
    }

    /// Registration coerces any value other than `"recruiter"` to `Student`.
    pub fn from_signup(value: Option<&str>) -> Self {
        match value {
            Some("recruiter") => Role::Recruiter,
            _ => Role::Student,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "recruiter" => Ok(Role::Recruiter),
            _ => Err(()),
        }
    }
}

/// A registered account.
///
/// `email` is stored lowercased and is unique across all users. `role` is
/// immutable after creation. `password` is stored in directly comparable
/// form; a production deployment must substitute a salted hash before
/// exposure (external contract unchanged).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_image: String,
    pub password: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub resume: Option<String>,
}

impl User {
    /// Generate a new user id.
    pub fn new_id() -> String {
        format!("usr-{}", Uuid::new_v4())
    }

    /// Copy of this user with the password stripped. The only form a user
    /// ever leaves the service in.
    pub fn sanitized(&self) -> SanitizedUser {
        SanitizedUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            company_name: self.company_name.clone(),
            company_image: self.company_image.clone(),
            bio: self.bio.clone(),
            skills: self.skills.clone(),
            resume: self.resume.clone(),
        }
    }
}

/// User view with the credential removed. Never echoes the password back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub company_name: String,
    pub company_image: String,
    pub bio: String,
    pub skills: String,
    pub resume: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_signup_coercion() {
        assert_eq!(Role::from_signup(Some("recruiter")), Role::Recruiter);
        assert_eq!(Role::from_signup(Some("student")), Role::Student);
        assert_eq!(Role::from_signup(Some("admin")), Role::Student);
        assert_eq!(Role::from_signup(None), Role::Student);
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Recruiter).unwrap(), "\"recruiter\"");
        let role: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn test_sanitized_user_has_no_password() {
        let user = User {
            id: User::new_id(),
            name: "Dev".into(),
            email: "dev@x.com".into(),
            role: Role::Student,
            company_name: String::new(),
            company_image: String::new(),
            password: "secret".into(),
            bio: String::new(),
            skills: String::new(),
            resume: None,
        };
        let json = serde_json::to_value(user.sanitized()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "dev@x.com");
    }

    #[test]
    fn test_user_camel_case_layout() {
        let user = User {
            id: "usr-1".into(),
            name: "HR".into(),
            email: "hr@acme.com".into(),
            role: Role::Recruiter,
            company_name: "Acme".into(),
            company_image: "img".into(),
            password: "secret".into(),
            bio: String::new(),
            skills: String::new(),
            resume: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["companyImage"], "img");
    }
}
