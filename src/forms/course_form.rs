use super::field::TextField;
use super::lessons::{LessonField, LessonList};
use super::validation::{CATEGORY, COURSE_NAME};
use crate::models::Course;

/// Editable draft of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseForm {
    id: String,
    pub name: TextField,
    pub category: TextField,
    pub lessons: LessonList,
}

impl CourseForm {
    pub fn from_course(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            name: TextField::new(course.name.clone(), COURSE_NAME),
            category: TextField::new(course.category.clone(), CATEGORY),
            lessons: LessonList::from_lessons(course.lessons.as_deref()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name.set(value);
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.category.set(value);
    }

    pub fn set_lesson(&mut self, index: usize, field: LessonField, value: impl Into<String>) -> bool {
        self.lessons.set(index, field, value)
    }

    pub fn is_valid(&self) -> bool {
        self.name.is_valid() && self.category.is_valid() && self.lessons.is_valid()
    }

    pub fn mark_all_touched(&mut self) {
        self.name.mark_touched();
        self.category.mark_touched();
        self.lessons.mark_all_touched();
    }

    pub fn value(&self) -> Course {
        Course {
            id: self.id.clone(),
            name: self.name.value().to_string(),
            category: self.category.value().to_string(),
            lessons: Some(self.lessons.values()),
        }
    }
}
