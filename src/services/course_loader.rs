use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::api::{CourseApi, ListParams};
use crate::error::AppError;
use crate::models::{Course, CoursePage};

/// Courses from the most recent successful listing, indexed by id.
///
/// A snapshot is immutable; a new listing replaces it as a whole.
#[derive(Debug, Default)]
pub struct CourseCache {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl CourseCache {
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let index = courses
            .iter()
            .enumerate()
            .map(|(pos, c)| (normalize_id(&c.id).to_string(), pos))
            .collect();
        Self { courses, index }
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.index
            .get(normalize_id(id))
            .and_then(|&pos| self.courses.get(pos))
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

fn normalize_id(id: &str) -> &str {
    id.trim()
}

/// Data access for courses with a listing-backed lookup cache.
pub struct CourseLoader {
    api: Arc<dyn CourseApi>,
    cache: RwLock<Arc<CourseCache>>,
}

impl CourseLoader {
    pub fn new(api: Arc<dyn CourseApi>) -> Self {
        Self {
            api,
            cache: RwLock::new(Arc::new(CourseCache::default())),
        }
    }

    /// Fetches one page and replaces the cache with its courses.
    pub async fn list(&self, params: ListParams) -> Result<CoursePage, AppError> {
        let page = self.api.list(params).await?;
        info!(
            "Listed {} courses (page {}, size {}, total {})",
            page.courses.len(),
            params.page,
            params.page_size,
            page.total_elements
        );
        self.replace_cache(CourseCache::from_courses(page.courses.clone()));
        Ok(page)
    }

    /// Returns the cached course when present, otherwise fetches it.
    pub async fn load_by_id(&self, id: &str) -> Result<Course, AppError> {
        if let Some(course) = self.cached().get(id) {
            debug!("Cache hit for course {}", id);
            return Ok(course.clone());
        }
        debug!("Cache miss for course {}, fetching", id);
        self.api.get(normalize_id(id)).await
    }

    /// Creates the course when it has no id, otherwise replaces it.
    ///
    /// The id is trimmed first, so a blank id creates.
    pub async fn save(&self, course: &Course) -> Result<Course, AppError> {
        let course = Course {
            id: normalize_id(&course.id).to_string(),
            ..course.clone()
        };
        let result = if course.is_new() {
            self.api.create(&course).await
        } else {
            self.api.update(&course).await
        };

        match &result {
            Ok(saved) if course.is_new() => info!("Created course {} ({})", saved.id, saved.name),
            Ok(saved) => info!("Updated course {} ({})", saved.id, saved.name),
            Err(e) => warn!("Failed to save course {:?}: {}", course.id, e),
        }
        result
    }

    pub async fn remove(&self, id: &str) -> Result<(), AppError> {
        match self.api.delete(normalize_id(id)).await {
            Ok(()) => {
                info!("Removed course {}", id);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to remove course {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Current cache snapshot.
    pub fn cached(&self) -> Arc<CourseCache> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn replace_cache(&self, cache: CourseCache) {
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(cache);
    }
}
