pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod ui;

pub use api::{CourseApi, CourseHttpClient, ListParams};
pub use config::ApiConfig;
pub use error::AppError;
