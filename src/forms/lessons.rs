use super::field::TextField;
use super::validation::{FieldErrors, LESSON_NAME, LESSON_VIDEO, error_message};
use crate::models::Lesson;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonField {
    Name,
    YoutubeUrl,
}

/// Editable row for one lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonForm {
    id: String,
    pub name: TextField,
    pub youtube_url: TextField,
}

impl LessonForm {
    pub fn blank() -> Self {
        Self::from_lesson(&Lesson::default())
    }

    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id.clone(),
            name: TextField::new(lesson.name.clone(), LESSON_NAME),
            youtube_url: TextField::new(lesson.youtube_url.clone(), LESSON_VIDEO),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn field(&self, field: LessonField) -> &TextField {
        match field {
            LessonField::Name => &self.name,
            LessonField::YoutubeUrl => &self.youtube_url,
        }
    }

    pub fn field_mut(&mut self, field: LessonField) -> &mut TextField {
        match field {
            LessonField::Name => &mut self.name,
            LessonField::YoutubeUrl => &mut self.youtube_url,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.name.is_valid() && self.youtube_url.is_valid()
    }

    pub fn mark_all_touched(&mut self) {
        self.name.mark_touched();
        self.youtube_url.mark_touched();
    }

    pub fn value(&self) -> Lesson {
        Lesson {
            id: self.id.clone(),
            name: self.name.value().to_string(),
            youtube_url: self.youtube_url.value().to_string(),
        }
    }
}

/// Ordered lesson rows of a course draft.
///
/// The list may be emptied by `remove_lesson`; it then reports `required`
/// until a lesson is added again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonList {
    items: Vec<LessonForm>,
    touched: bool,
}

impl LessonList {
    /// Rows for a source lesson list. A missing list starts with one blank
    /// row; an explicit empty list starts empty.
    pub fn from_lessons(lessons: Option<&[Lesson]>) -> Self {
        let items = match lessons {
            Some(lessons) => lessons.iter().map(LessonForm::from_lesson).collect(),
            None => vec![LessonForm::blank()],
        };
        Self { items, touched: false }
    }

    pub fn add_lesson(&mut self) {
        self.items.push(LessonForm::blank());
    }

    /// Removes the row at `index`; out-of-range indices leave the list as is.
    pub fn remove_lesson(&mut self, index: usize) -> Option<LessonForm> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LessonForm> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut LessonForm> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LessonForm> {
        self.items.iter()
    }

    /// Returns `false` when there is no row at `index`.
    pub fn set(&mut self, index: usize, field: LessonField, value: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(lesson) => {
                lesson.field_mut(field).set(value);
                true
            }
            None => false,
        }
    }

    /// Errors of the collection itself, not of its rows.
    pub fn errors(&self) -> FieldErrors {
        if self.items.is_empty() {
            FieldErrors::required()
        } else {
            FieldErrors::default()
        }
    }

    pub fn message(&self) -> String {
        error_message(&self.errors())
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    /// True when the "at least one lesson" notice should be displayed.
    pub fn shows_required(&self) -> bool {
        self.touched && self.errors().required
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_valid() && self.items.iter().all(LessonForm::is_valid)
    }

    pub fn mark_all_touched(&mut self) {
        self.touched = true;
        for lesson in &mut self.items {
            lesson.mark_all_touched();
        }
    }

    pub fn values(&self) -> Vec<Lesson> {
        self.items.iter().map(LessonForm::value).collect()
    }
}
