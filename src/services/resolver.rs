use crate::error::AppError;
use crate::models::Course;
use crate::services::course_loader::CourseLoader;
use crate::ui::Route;

/// Course to show on entering a screen: blank without an id, loaded otherwise.
pub async fn resolve_course(loader: &CourseLoader, id: Option<&str>) -> Result<Course, AppError> {
    match id {
        Some(id) => loader.load_by_id(id).await,
        None => Ok(Course::blank()),
    }
}

pub async fn resolve_route(loader: &CourseLoader, route: &Route) -> Result<Course, AppError> {
    resolve_course(loader, route.record_id()).await
}
