use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

/// Toasts and modal dialogs.
pub trait Notifier: Send + Sync {
    /// Transient confirmation that dismisses itself after `duration`.
    fn toast(&self, message: &str, duration: Duration);
    /// Modal error dialog.
    fn error(&self, message: &str);
    /// Modal yes/no question.
    fn confirm(&self, message: &str) -> bool;
}

pub trait Navigator: Send + Sync {
    fn go(&self, route: Route);
    fn back(&self);
}

/// Addressable screens, relative to the courses root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    New,
    Edit(String),
    View(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::List => String::new(),
            Route::New => "new".to_string(),
            Route::Edit(id) => format!("edit/{}", id),
            Route::View(id) => format!("view/{}", id),
        }
    }

    /// Identifier the screen must be resolved with, if any.
    pub fn record_id(&self) -> Option<&str> {
        match self {
            Route::Edit(id) | Route::View(id) => Some(id),
            Route::List | Route::New => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        let mut parts = trimmed.splitn(2, '/');
        let head = parts.next().unwrap_or_default();
        let tail = parts.next().filter(|id| !id.is_empty() && !id.contains('/'));

        match (head, tail) {
            ("", None) => Ok(Route::List),
            ("new", None) => Ok(Route::New),
            ("edit", Some(id)) => Ok(Route::Edit(id.to_string())),
            ("view", Some(id)) => Ok(Route::View(id.to_string())),
            _ => Err(AppError::InvalidRoute(s.to_string())),
        }
    }
}
