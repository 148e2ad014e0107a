pub mod dto;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::models::{Course, CoursePage};

pub use dto::ListParams;

/// REST backend for course records.
#[async_trait]
pub trait CourseApi: Send + Sync {
    async fn list(&self, params: ListParams) -> Result<CoursePage, AppError>;
    async fn get(&self, id: &str) -> Result<Course, AppError>;
    async fn create(&self, course: &Course) -> Result<Course, AppError>;
    async fn update(&self, course: &Course) -> Result<Course, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

pub struct CourseHttpClient {
    client: Client,
    config: ApiConfig,
}

impl CourseHttpClient {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn check(response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Status {
            status,
            message: dto::ErrorBody::describe(&body),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        let response = Self::check(response).await?;
        let body_text = response.text().await?;
        serde_json::from_str::<T>(&body_text).map_err(|e| {
            tracing::error!("Failed to parse courses response: {}", e);
            AppError::Decode(e)
        })
    }
}

#[async_trait]
impl CourseApi for CourseHttpClient {
    async fn list(&self, params: ListParams) -> Result<CoursePage, AppError> {
        let response = self
            .client
            .get(self.config.courses_url())
            .query(&params)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get(&self, id: &str) -> Result<Course, AppError> {
        let response = self.client.get(self.config.course_url(id)).send().await?;
        Self::decode(response).await
    }

    async fn create(&self, course: &Course) -> Result<Course, AppError> {
        let response = self
            .client
            .post(self.config.courses_url())
            .json(course)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update(&self, course: &Course) -> Result<Course, AppError> {
        let response = self
            .client
            .put(self.config.course_url(&course.id))
            .json(course)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let response = self.client.delete(self.config.course_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
