//! Business logic services

pub mod catalog;
pub mod loans;

use crate::{config::CatalogConfig, repository::Repository};

/// Catalog manager owning all items and members.
///
/// Catalog operations live in [`catalog`], checkout and checkin in [`loans`].
#[derive(Debug, Clone)]
pub struct Library {
    repository: Repository,
    overdue_days: i64,
}

impl Library {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            repository: Repository::new(),
            overdue_days: config.overdue_days,
        }
    }

    /// Default overdue threshold, in days
    pub fn overdue_days(&self) -> i64 {
        self.overdue_days
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}
