//! Item (catalog entry) model and related types.
//!
//! Availability is not stored separately: an item is available exactly when
//! it carries no borrow timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::Genre;

/// Capability shared by every catalog entry that can be lent out
pub trait Borrowable {
    fn item_id(&self) -> &str;

    fn borrowed_at(&self) -> Option<DateTime<Utc>>;

    fn is_available(&self) -> bool {
        self.borrowed_at().is_none()
    }

    /// One-line human readable description
    fn display_info(&self) -> String;

    fn check_out(&mut self, at: DateTime<Utc>);

    fn check_in(&mut self);
}

/// Book held by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub borrowed_at: Option<DateTime<Utc>>,
}

impl Borrowable for Book {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn borrowed_at(&self) -> Option<DateTime<Utc>> {
        self.borrowed_at
    }

    fn display_info(&self) -> String {
        format!("{} by {} - {}", self.title, self.author, self.genre)
    }

    fn check_out(&mut self, at: DateTime<Utc>) {
        self.borrowed_at = Some(at);
    }

    fn check_in(&mut self) {
        self.borrowed_at = None;
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Item identifier is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub genre: Genre,
}

impl CreateBook {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: Genre,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre,
        }
    }
}

impl From<CreateBook> for Book {
    fn from(req: CreateBook) -> Self {
        Self {
            id: req.id,
            title: req.title,
            author: req.author,
            genre: req.genre,
            borrowed_at: None,
        }
    }
}
