use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::AppError;
use crate::forms::{CourseForm, LessonField};
use crate::models::Course;
use crate::services::course_loader::CourseLoader;
use crate::ui::{Navigator, Notifier};

pub const SAVED_MESSAGE: &str = "Course saved successfully!";
pub const SAVE_ERROR_MESSAGE: &str = "Error saving course.";
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    Submitting,
    Saved,
    Closed,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Saved(Course),
    /// The draft failed validation; every control is now touched.
    Invalid,
    Failed(AppError),
    /// The session was not accepting submits.
    Ignored,
}

/// Holds a session in `Submitting` for as long as a save is in flight.
///
/// Dropping it, whether the save settled or the submit future was abandoned,
/// puts the session back into `Editing`.
struct SubmittingGuard<'a> {
    state: &'a mut SessionState,
}

impl<'a> SubmittingGuard<'a> {
    fn enter(state: &'a mut SessionState) -> Self {
        *state = SessionState::Submitting;
        Self { state }
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        *self.state = SessionState::Editing;
    }
}

/// Create/edit workflow for one course draft.
pub struct CourseEditSession {
    form: CourseForm,
    state: SessionState,
    loader: Arc<CourseLoader>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl CourseEditSession {
    pub fn new(
        course: &Course,
        loader: Arc<CourseLoader>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            form: CourseForm::from_course(course),
            state: SessionState::Editing,
            loader,
            notifier,
            navigator,
        }
    }

    pub fn form(&self) -> &CourseForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CourseForm {
        &mut self.form
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state == SessionState::Editing
    }

    pub fn add_lesson(&mut self) {
        self.form.lessons.add_lesson();
    }

    pub fn remove_lesson(&mut self, index: usize) -> bool {
        self.form.lessons.remove_lesson(index).is_some()
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            debug!("Ignoring submit while session is {:?}", self.state);
            return SubmitOutcome::Ignored;
        }

        if !self.form.is_valid() {
            self.form.mark_all_touched();
            return SubmitOutcome::Invalid;
        }

        let draft = self.form.value();
        let result = {
            let _submitting = SubmittingGuard::enter(&mut self.state);
            self.loader.save(&draft).await
        };
        match result {
            Ok(saved) => {
                self.notifier.toast(SAVED_MESSAGE, TOAST_DURATION);
                self.leave(SessionState::Saved);
                SubmitOutcome::Saved(saved)
            }
            Err(e) => {
                warn!("Save failed, keeping draft: {}", e);
                self.notifier.error(SAVE_ERROR_MESSAGE);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Discards the draft and returns to the previous screen.
    pub fn cancel(mut self) {
        self.leave(SessionState::Closed);
    }

    fn leave(&mut self, state: SessionState) {
        self.state = state;
        self.navigator.back();
    }

    pub fn name_message(&self) -> String {
        self.form.name.message()
    }

    pub fn category_message(&self) -> String {
        self.form.category.message()
    }

    pub fn lessons_message(&self) -> String {
        self.form.lessons.message()
    }

    pub fn lesson_message(&self, index: usize, field: LessonField) -> String {
        self.form
            .lessons
            .get(index)
            .map(|lesson| lesson.field(field).message())
            .unwrap_or_default()
    }
}
