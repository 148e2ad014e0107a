pub mod course_list;
pub mod course_loader;
pub mod course_view;
pub mod edit_session;
pub mod resolver;

pub use course_list::CourseListScreen;
pub use course_loader::{CourseCache, CourseLoader};
pub use course_view::CourseView;
pub use edit_session::{CourseEditSession, SessionState, SubmitOutcome};
pub use resolver::{resolve_course, resolve_route};
