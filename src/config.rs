use std::env;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads `COURSES_API_URL` and `COURSES_API_TIMEOUT_SECS`, loading `.env` first.
    pub fn new_from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let base_url = env::var("COURSES_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(AppError::Config("COURSES_API_URL is empty".to_string()));
        }

        let timeout_secs = match env::var("COURSES_API_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!("COURSES_API_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let mut config = Self::new(base_url.trim());
        config.timeout = Duration::from_secs(timeout_secs);
        Ok(config)
    }

    pub fn courses_url(&self) -> String {
        format!("{}/api/courses", self.base_url)
    }

    pub fn course_url(&self, id: &str) -> String {
        format!("{}/api/courses/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
