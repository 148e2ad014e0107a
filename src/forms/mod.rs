pub mod course_form;
pub mod field;
pub mod lessons;
pub mod validation;

pub use course_form::CourseForm;
pub use field::TextField;
pub use lessons::{LessonField, LessonForm, LessonList};
pub use validation::{Constraint, FieldErrors, error_message};
