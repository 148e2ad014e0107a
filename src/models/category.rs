use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FrontEnd,
    BackEnd,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::FrontEnd, Category::BackEnd];

    pub fn label(self) -> &'static str {
        match self {
            Category::FrontEnd => "Front-end",
            Category::BackEnd => "Back-end",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::FrontEnd => "code",
            Category::BackEnd => "computer",
        }
    }

    /// Icon for a free-text category; unknown values get the front-end icon.
    pub fn icon_for(value: &str) -> &'static str {
        value
            .parse::<Category>()
            .map(Category::icon)
            .unwrap_or(Category::FrontEnd.icon())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
