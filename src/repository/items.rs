//! Items repository.
//!
//! Records are keyed by identifier; iteration follows insertion order.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::Genre,
        item::{Book, Borrowable},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ItemsRepository {
    items: IndexMap<String, Book>,
}

impl ItemsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new item. The identifier must not be in use.
    pub fn create(&mut self, book: Book) -> AppResult<()> {
        if self.items.contains_key(&book.id) {
            return Err(AppError::Duplicate(format!("item {}", book.id)));
        }
        self.items.insert(book.id.clone(), book);
        Ok(())
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<&Book> {
        self.items
            .get(id)
            .ok_or_else(|| AppError::ItemNotFound(id.to_string()))
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> AppResult<&mut Book> {
        self.items
            .get_mut(id)
            .ok_or_else(|| AppError::ItemNotFound(id.to_string()))
    }

    pub fn list(&self) -> impl Iterator<Item = &Book> {
        self.items.values()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn find_by_genre(&self, genre: Genre) -> Vec<&Book> {
        self.items.values().filter(|b| b.genre == genre).collect()
    }

    /// Borrowed items whose borrow timestamp is strictly before `cutoff`
    pub fn find_borrowed_before(&self, cutoff: DateTime<Utc>) -> Vec<&Book> {
        self.items
            .values()
            .filter(|b| !b.is_available())
            .filter(|b| b.borrowed_at().map(|d| d < cutoff).unwrap_or(false))
            .collect()
    }
}
