#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use course_desk::models::{Course, CoursePage, Lesson};
use course_desk::ui::{Navigator, Notifier, Route};
use course_desk::{AppError, CourseApi, ListParams};
use reqwest::StatusCode;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(ListParams),
    Get(String),
    Create(Course),
    Update(Course),
    Delete(String),
}

/// In-memory backend that records every request.
#[derive(Default)]
pub struct FakeCourseApi {
    calls: Mutex<Vec<Call>>,
    courses: Mutex<Vec<Course>>,
    failure: Mutex<Option<StatusCode>>,
    stalled: AtomicBool,
}

impl FakeCourseApi {
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Mutex::new(courses),
            ..Self::default()
        }
    }

    pub fn fail_with(&self, status: StatusCode) {
        *self.failure.lock().unwrap() = Some(status);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// While set, create and update are recorded but never answer.
    pub fn stall_writes(&self, stalled: bool) {
        self.stalled.store(stalled, Ordering::SeqCst);
    }

    async fn wait_if_stalled(&self) {
        if self.stalled.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(*c)).count()
    }

    fn record(&self, call: Call) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);
        match *self.failure.lock().unwrap() {
            Some(status) => Err(AppError::Status {
                status,
                message: "backend failure".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn not_found(id: &str) -> AppError {
        AppError::Status {
            status: StatusCode::NOT_FOUND,
            message: format!("Course not found with id: {}", id),
        }
    }
}

#[async_trait]
impl CourseApi for FakeCourseApi {
    async fn list(&self, params: ListParams) -> Result<CoursePage, AppError> {
        self.record(Call::List(params))?;
        let all = self.courses.lock().unwrap().clone();
        let size = params.page_size.max(1) as usize;
        let courses = all
            .iter()
            .skip(params.page as usize * size)
            .take(size)
            .cloned()
            .collect();
        Ok(CoursePage {
            courses,
            total_elements: all.len() as u64,
            total_pages: all.len().div_ceil(size) as u32,
        })
    }

    async fn get(&self, id: &str) -> Result<Course, AppError> {
        self.record(Call::Get(id.to_string()))?;
        self.courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, course: &Course) -> Result<Course, AppError> {
        self.record(Call::Create(course.clone()))?;
        self.wait_if_stalled().await;
        let mut courses = self.courses.lock().unwrap();
        let mut saved = course.clone();
        saved.id = (courses.len() + 100).to_string();
        courses.push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, course: &Course) -> Result<Course, AppError> {
        self.record(Call::Update(course.clone()))?;
        self.wait_if_stalled().await;
        let mut courses = self.courses.lock().unwrap();
        let existing = courses
            .iter_mut()
            .find(|c| c.id == course.id)
            .ok_or_else(|| Self::not_found(&course.id))?;
        *existing = course.clone();
        Ok(course.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.record(Call::Delete(id.to_string()))?;
        let mut courses = self.courses.lock().unwrap();
        let before = courses.len();
        courses.retain(|c| c.id != id);
        if courses.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Toast(String, Duration),
    Error(String),
    Confirm(String),
}

pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
    answer: bool,
}

impl RecordingNotifier {
    pub fn answering(answer: bool) -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
            answer,
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Error(m) => Some(m),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::answering(true)
    }
}

impl Notifier for RecordingNotifier {
    fn toast(&self, message: &str, duration: Duration) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Toast(message.to_string(), duration));
    }

    fn error(&self, message: &str) {
        self.notices.lock().unwrap().push(Notice::Error(message.to_string()));
    }

    fn confirm(&self, message: &str) -> bool {
        self.notices.lock().unwrap().push(Notice::Confirm(message.to_string()));
        self.answer
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Nav {
    Go(Route),
    Back,
}

#[derive(Default)]
pub struct RecordingNavigator {
    moves: Mutex<Vec<Nav>>,
}

impl RecordingNavigator {
    pub fn moves(&self) -> Vec<Nav> {
        self.moves.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go(&self, route: Route) {
        self.moves.lock().unwrap().push(Nav::Go(route));
    }

    fn back(&self) {
        self.moves.lock().unwrap().push(Nav::Back);
    }
}

pub fn lesson(name: &str, youtube_url: &str) -> Lesson {
    Lesson {
        id: String::new(),
        name: name.to_string(),
        youtube_url: youtube_url.to_string(),
    }
}

pub fn course(id: &str, name: &str) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        category: "Front-end".to_string(),
        lessons: Some(vec![lesson("Introduction", "dQw4w9WgXcQ")]),
    }
}
