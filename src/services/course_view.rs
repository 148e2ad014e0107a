use crate::models::{Course, Lesson};

const PLAYER_WIDTH_RATIO: f64 = 0.9;
const PLAYER_ASPECT: f64 = 0.6;

/// Read-only course page with one selected lesson.
#[derive(Debug, Clone)]
pub struct CourseView {
    course: Course,
    selected: Option<usize>,
}

impl CourseView {
    pub fn new(course: Course) -> Self {
        let selected = if course.lessons().is_empty() { None } else { Some(0) };
        Self { course, selected }
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn display(&mut self, index: usize) -> bool {
        if index < self.course.lessons().len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn selected_lesson(&self) -> Option<&Lesson> {
        self.selected.and_then(|i| self.course.lessons().get(i))
    }

    pub fn selected_video_id(&self) -> Option<String> {
        self.selected_lesson().map(|l| video_id(&l.youtube_url))
    }
}

/// Video id from a bare id, a `youtu.be/` link or a `youtube.com/watch?v=` link.
pub fn video_id(reference: &str) -> String {
    let trimmed = reference.trim();

    let start = if let Some(pos) = trimmed.find("youtu.be/") {
        Some(pos + "youtu.be/".len())
    } else if trimmed.contains("youtube.com/watch") {
        trimmed.find("v=").map(|pos| pos + 2)
    } else {
        None
    };

    match start.and_then(|s| trimmed.get(s..)) {
        Some(rest) if !rest.is_empty() => {
            let end = rest.find(['&', '?', '#']).unwrap_or(rest.len());
            rest[..end].to_string()
        }
        _ => trimmed.to_string(),
    }
}

/// Player size for a container of the given width.
pub fn player_size(container_width: f64) -> (f64, f64) {
    let width = container_width * PLAYER_WIDTH_RATIO;
    (width, width * PLAYER_ASPECT)
}
