use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: u32,
    pub page_size: u32,
}

impl ListParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self { page: 0, page_size: 10 }
    }
}

/// Error body returned by the backend's exception handlers.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best human-readable text for a failed response body.
    pub fn describe(body: &str) -> String {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { message: Some(message), .. }) => message,
            Ok(ErrorBody { error: Some(error), .. }) => error,
            _ => body.trim().to_string(),
        }
    }
}
