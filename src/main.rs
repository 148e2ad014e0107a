mod console;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use course_desk::forms::LessonField;
use course_desk::models::{Category, Course};
use course_desk::services::{
    CourseEditSession, CourseListScreen, CourseLoader, CourseView, SubmitOutcome, resolve_route,
};
use course_desk::ui::{Navigator, Route};
use course_desk::{ApiConfig, CourseHttpClient, ListParams, telemetry};

use crate::console::{ConsoleNotifier, HistoryNavigator};

#[derive(Parser, Debug)]
#[command(name = "course_desk")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    yes: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// List a page of courses
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },
    /// Show a course and its lessons
    View { id: String },
    /// Remove a course
    Remove { id: String },
    /// Print a blank draft
    New,
    /// Print the draft for an existing course
    Edit { id: String },
    /// Validate and save a course read from a JSON file
    Save { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    telemetry::init();
    let cli = Cli::parse();

    let config = ApiConfig::new_from_env()?;
    let api = Arc::new(CourseHttpClient::new(config)?);
    let loader = Arc::new(CourseLoader::new(api));
    let notifier = Arc::new(ConsoleNotifier::new(cli.yes));
    let navigator = Arc::new(HistoryNavigator::default());

    match cli.command {
        Command::List { page, page_size } => {
            navigator.go(Route::List);
            let mut screen = CourseListScreen::new(loader, notifier, navigator);
            if !screen.load(ListParams::new(page, page_size)).await {
                return Ok(ExitCode::FAILURE);
            }
            print_page(&screen);
        }
        Command::View { id } => {
            let route = Route::View(id);
            let course = resolve_route(&loader, &route).await?;
            navigator.go(route);
            print_view(&CourseView::new(course));
        }
        Command::Remove { id } => {
            let course = resolve_route(&loader, &Route::Edit(id)).await?;
            let mut screen = CourseListScreen::new(loader, notifier, navigator);
            screen.on_remove(&course).await;
        }
        Command::New => print_draft(&resolve_route(&loader, &Route::New).await?)?,
        Command::Edit { id } => print_draft(&resolve_route(&loader, &Route::Edit(id)).await?)?,
        Command::Save { file } => {
            let contents = std::fs::read_to_string(&file)?;
            let course: Course = serde_json::from_str(&contents)?;
            navigator.go(if course.is_new() { Route::New } else { Route::Edit(course.id.clone()) });

            let mut session = CourseEditSession::new(&course, loader, notifier, navigator);
            let outcome = session.submit().await;
            match &outcome {
                SubmitOutcome::Saved(saved) => println!("{}", saved.id),
                SubmitOutcome::Invalid => print_messages(&session),
                // the notifier has already reported it
                SubmitOutcome::Failed(_) | SubmitOutcome::Ignored => {}
            }
            if !succeeded(&outcome) {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn succeeded(outcome: &SubmitOutcome) -> bool {
    matches!(outcome, SubmitOutcome::Saved(_))
}

fn print_page(screen: &CourseListScreen) {
    let page = screen.page();
    for course in &page.courses {
        println!(
            "{:>6}  [{}] {:<40} {}",
            course.id,
            Category::icon_for(&course.category),
            course.name,
            course.category
        );
    }
    let params = screen.params();
    println!(
        "page {} of {} ({} courses)",
        params.page + 1,
        page.total_pages.max(1),
        page.total_elements
    );
}

fn print_view(view: &CourseView) {
    let course = view.course();
    println!("{} ({})", course.name, course.category);
    for (index, lesson) in course.lessons().iter().enumerate() {
        let marker = if view.is_selected(index) { ">" } else { " " };
        println!("{} {}. {}", marker, index + 1, lesson.name);
    }
    if let Some(video) = view.selected_video_id() {
        println!("https://www.youtube.com/embed/{}", video);
    }
}

fn print_draft(course: &Course) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(course)?);
    Ok(())
}

fn print_messages(session: &CourseEditSession) {
    let fields = [
        ("name", session.name_message()),
        ("category", session.category_message()),
        ("lessons", session.lessons_message()),
    ];
    for (field, message) in fields {
        if !message.is_empty() {
            eprintln!("{}: {}", field, message);
        }
    }
    for index in 0..session.form().lessons.len() {
        for (field, label) in [(LessonField::Name, "name"), (LessonField::YoutubeUrl, "youtubeUrl")] {
            let message = session.lesson_message(index, field);
            if !message.is_empty() {
                eprintln!("lessons[{}].{}: {}", index, label, message);
            }
        }
    }
}
