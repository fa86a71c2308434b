//! API configuration.

use std::path::PathBuf;

/// Default company image attached to recruiter accounts and their jobs when
/// none is supplied.
pub const DEFAULT_COMPANY_IMAGE: &str =
    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=900&q=80";

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size in bytes; exceeding it fails with 413 before
    /// any domain logic runs
    pub max_body_size: usize,
    /// Path of the snapshot file
    pub store_path: PathBuf,
    /// Environment (development/production)
    pub environment: String,
    /// Domain default values passed into the services
    pub defaults: DomainDefaults,
}

/// Default values the domain services fill in when a request omits a field.
///
/// Centralized here rather than scattered across handlers.
#[derive(Debug, Clone)]
pub struct DomainDefaults {
    /// Company image for recruiters and jobs without one
    pub company_image: String,
    /// Job industry
    pub industry: String,
    /// Job company size
    pub company_size: String,
    /// Job company founding year
    pub founded: String,
}

impl Default for DomainDefaults {
    fn default() -> Self {
        Self {
            company_image: DEFAULT_COMPANY_IMAGE.to_string(),
            industry: "Technology".to_string(),
            company_size: "50-200 employees".to_string(),
            founded: "2018".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            cors_origins: vec!["*".to_string()],
            max_body_size: 1_000_000,
            store_path: PathBuf::from("db.json"),
            environment: "development".to_string(),
            defaults: DomainDefaults::default(),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4000),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["*".to_string()]),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1_000_000),
            store_path: std::env::var("STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("db.json")),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            defaults: DomainDefaults::default(),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}
