use crate::error::ShelfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type BookId = u64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookStatus {
    #[default]
    Available,
    CheckedOut,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::CheckedOut => "checked-out",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(BookStatus::Available),
            "checked-out" => Ok(BookStatus::CheckedOut),
            _ => Err(ShelfError::InvalidStatus(s.trim().to_string())),
        }
    }
}

/// One catalog entry. Field order here is the key order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

impl Book {
    pub fn new(id: BookId, title: String, author: String, year: i32) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: BookStatus::default(),
        }
    }

    /// Case-insensitive substring match on title or author, or an exact match on the year.
    pub fn matches(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        self.title.to_lowercase().contains(&query_lower)
            || self.author.to_lowercase().contains(&query_lower)
            || query == self.year.to_string()
    }
}
