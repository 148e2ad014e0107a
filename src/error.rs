use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("API error {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown route: {0}")]
    InvalidRoute(String),
}

impl AppError {
    /// HTTP status carried by a backend failure, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Status { status, .. } => Some(*status),
            AppError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_exposed_for_backend_failures() {
        let err = AppError::Status {
            status: StatusCode::NOT_FOUND,
            message: "Course not found with id: 9".to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "API error 404 Not Found: Course not found with id: 9");
    }

    #[test]
    fn local_failures_have_no_status() {
        let err = AppError::Config("COURSES_API_URL is empty".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
