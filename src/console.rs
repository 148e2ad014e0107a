use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Duration;

use course_desk::ui::{Navigator, Notifier, Route};
use tracing::info;

/// Notifier that writes to the terminal.
pub struct ConsoleNotifier {
    assume_yes: bool,
}

impl ConsoleNotifier {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Notifier for ConsoleNotifier {
    fn toast(&self, message: &str, _duration: Duration) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("Error! {}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", message);
        io::stdout().flush().ok();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

/// Navigator that records the route history instead of switching screens.
#[derive(Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn current(&self) -> Route {
        self.history
            .lock()
            .map(|h| h.last().cloned().unwrap_or(Route::List))
            .unwrap_or(Route::List)
    }
}

impl Navigator for HistoryNavigator {
    fn go(&self, route: Route) {
        info!("navigate to {}", route);
        if let Ok(mut history) = self.history.lock() {
            history.push(route);
        }
    }

    fn back(&self) {
        if let Ok(mut history) = self.history.lock() {
            history.pop();
        }
        info!("navigate back to {}", self.current());
    }
}
