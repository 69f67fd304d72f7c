//! Catalog management service

use chrono::{DateTime, TimeDelta, Utc};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        enums::Genre,
        item::{Book, Borrowable, CreateBook},
        member::{CreateMember, Member},
    },
};

use super::Library;

impl Library {
    /// Add a new item to the catalog
    pub fn add_item(&mut self, item: CreateBook) -> AppResult<()> {
        item.validate()?;
        let id = item.id.clone();
        if let Err(e) = self.repository.items.create(item.into()) {
            tracing::warn!("Rejected item {}: {}", id, e);
            return Err(e);
        }
        tracing::info!("Added item {}", id);
        Ok(())
    }

    /// Register a new member
    pub fn add_member(&mut self, member: CreateMember) -> AppResult<()> {
        member.validate()?;
        let id = member.id;
        if let Err(e) = self.repository.members.create(member.into()) {
            tracing::warn!("Rejected member {}: {}", id, e);
            return Err(e);
        }
        tracing::info!("Added member {}", id);
        Ok(())
    }

    pub fn get_item(&self, id: &str) -> AppResult<&Book> {
        self.repository.items.get_by_id(id)
    }

    pub fn get_member(&self, id: i32) -> AppResult<&Member> {
        self.repository.members.get_by_id(id)
    }

    /// All items, in insertion order
    pub fn items(&self) -> Vec<&Book> {
        self.repository.items.list().collect()
    }

    /// All members, in insertion order
    pub fn members(&self) -> Vec<&Member> {
        self.repository.members.list().collect()
    }

    /// Items of the given genre, in insertion order
    pub fn find_by_category(&self, genre: Genre) -> Vec<&Book> {
        let found = self.repository.items.find_by_genre(genre);
        tracing::debug!("Found {} {} items", found.len(), genre);
        found
    }

    /// Items borrowed more than `threshold_days` days ago
    pub fn find_overdue(&self, threshold_days: i64) -> Vec<&Book> {
        self.find_overdue_at(threshold_days, Utc::now())
    }

    /// Same as [`Library::find_overdue`] with the configured threshold
    pub fn find_overdue_default(&self) -> Vec<&Book> {
        self.find_overdue(self.overdue_days)
    }

    /// Items borrowed strictly before `now - threshold_days`.
    ///
    /// A cutoff outside the representable range clamps to the earliest or
    /// latest instant, so nothing or everything borrowed is overdue.
    pub fn find_overdue_at(&self, threshold_days: i64, now: DateTime<Utc>) -> Vec<&Book> {
        let cutoff = TimeDelta::try_days(threshold_days)
            .and_then(|delta| now.checked_sub_signed(delta))
            .unwrap_or(if threshold_days >= 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            });
        let found = self.repository.items.find_borrowed_before(cutoff);
        tracing::debug!("Found {} items borrowed before {}", found.len(), cutoff);
        found
    }

    pub fn display_items(&self) -> String {
        join_lines(self.repository.items.list())
    }

    pub fn display_members(&self) -> String {
        self.repository
            .members
            .list()
            .map(|m| m.display_info())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn display_by_category(&self, genre: Genre) -> String {
        join_lines(self.find_by_category(genre))
    }

    pub fn display_overdue(&self, threshold_days: i64) -> String {
        join_lines(self.find_overdue(threshold_days))
    }
}

fn join_lines<'a, I, T>(items: I) -> String
where
    I: IntoIterator<Item = &'a T>,
    T: Borrowable + 'a,
{
    items
        .into_iter()
        .map(|i| i.display_info())
        .collect::<Vec<_>>()
        .join("\n")
}
