use std::sync::Arc;

use tracing::warn;

use crate::api::ListParams;
use crate::models::{Course, CoursePage};
use crate::services::course_loader::CourseLoader;
use crate::services::edit_session::TOAST_DURATION;
use crate::ui::{Navigator, Notifier, Route};

pub const LOAD_ERROR_MESSAGE: &str = "Error loading courses.";
pub const REMOVE_CONFIRM_MESSAGE: &str = "Are you sure you want to remove this course?";
pub const REMOVED_MESSAGE: &str = "Course removed successfully!";
pub const REMOVE_ERROR_MESSAGE: &str = "Error trying to remove course.";

/// Paged course listing with add/edit/view/remove actions.
pub struct CourseListScreen {
    loader: Arc<CourseLoader>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    params: ListParams,
    page: CoursePage,
}

impl CourseListScreen {
    pub fn new(
        loader: Arc<CourseLoader>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            loader,
            notifier,
            navigator,
            params: ListParams::default(),
            page: CoursePage::default(),
        }
    }

    pub fn page(&self) -> &CoursePage {
        &self.page
    }

    pub fn params(&self) -> ListParams {
        self.params
    }

    /// Loads a page; on failure shows an error and leaves the listing empty.
    pub async fn load(&mut self, params: ListParams) -> bool {
        self.params = params;
        match self.loader.list(params).await {
            Ok(page) => {
                self.page = page;
                true
            }
            Err(e) => {
                warn!("Failed to load courses: {}", e);
                self.page = CoursePage::default();
                self.notifier.error(LOAD_ERROR_MESSAGE);
                false
            }
        }
    }

    pub async fn on_page(&mut self, page: u32, page_size: u32) -> bool {
        self.load(ListParams::new(page, page_size)).await
    }

    pub fn on_add(&self) {
        self.navigator.go(Route::New);
    }

    pub fn on_edit(&self, course: &Course) {
        self.navigator.go(Route::Edit(course.id.clone()));
    }

    pub fn on_view(&self, course: &Course) {
        self.navigator.go(Route::View(course.id.clone()));
    }

    /// Asks for confirmation, removes, then reloads the current page.
    /// Returns whether the course was removed.
    pub async fn on_remove(&mut self, course: &Course) -> bool {
        if !self.notifier.confirm(REMOVE_CONFIRM_MESSAGE) {
            return false;
        }

        match self.loader.remove(&course.id).await {
            Ok(()) => {
                self.load(self.params).await;
                self.notifier.toast(REMOVED_MESSAGE, TOAST_DURATION);
                true
            }
            Err(_) => {
                self.notifier.error(REMOVE_ERROR_MESSAGE);
                false
            }
        }
    }
}
