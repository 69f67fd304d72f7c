//! Loan transitions spanning items and members.
//!
//! Every guard runs before the first mutation, so a failed call leaves the
//! repository untouched.

use chrono::{DateTime, Utc};

use crate::{
    error::{AppError, AppResult},
    models::item::{Book, Borrowable},
};

use super::Repository;

impl Repository {
    /// Lend `item_id` to `member_id`, stamping the borrow time with `at`
    pub fn loans_checkout(&mut self, member_id: i32, item_id: &str, at: DateTime<Utc>) -> AppResult<()> {
        let member = self.members.get_mut(member_id)?;
        let book = self.items.get_mut(item_id)?;

        if !book.is_available() {
            return Err(AppError::ItemUnavailable(item_id.to_string()));
        }

        book.check_out(at);
        member.borrowed_items.push(book.id.clone());
        Ok(())
    }

    /// Take `item_id` back from `member_id`.
    ///
    /// The member must be the one holding the item; otherwise the item counts
    /// as not borrowed by them.
    pub fn loans_checkin(&mut self, member_id: i32, item_id: &str) -> AppResult<()> {
        let member = self.members.get_mut(member_id)?;
        let book = self.items.get_mut(item_id)?;

        if book.is_available() || !member.holds(item_id) {
            return Err(AppError::ItemNotBorrowed(item_id.to_string()));
        }

        book.check_in();
        member.borrowed_items.retain(|id| id != item_id);
        Ok(())
    }

    /// Items currently held by a member, in borrow order
    pub fn loans_for_member(&self, member_id: i32) -> AppResult<Vec<&Book>> {
        let member = self.members.get_by_id(member_id)?;
        member
            .borrowed_items
            .iter()
            .map(|id| self.items.get_by_id(id))
            .collect()
    }
}
