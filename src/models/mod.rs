pub mod category;
pub mod course;

pub use category::{Category, UnknownCategory};
pub use course::{Course, CoursePage, Lesson};
