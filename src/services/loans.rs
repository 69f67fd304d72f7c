//! Loan management service

use chrono::{DateTime, Utc};

use crate::{error::AppResult, models::item::Book};

use super::Library;

impl Library {
    /// Borrow an item for a member, stamped with the current time
    pub fn checkout(&mut self, member_id: i32, item_id: &str) -> AppResult<()> {
        self.checkout_at(member_id, item_id, Utc::now())
    }

    /// Borrow an item for a member, stamped with `at`
    pub fn checkout_at(&mut self, member_id: i32, item_id: &str, at: DateTime<Utc>) -> AppResult<()> {
        match self.repository.loans_checkout(member_id, item_id, at) {
            Ok(()) => {
                tracing::info!("Member {} borrowed item {}", member_id, item_id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Checkout of {} by member {} failed: {}", item_id, member_id, e);
                Err(e)
            }
        }
    }

    /// Return a borrowed item
    pub fn checkin(&mut self, member_id: i32, item_id: &str) -> AppResult<()> {
        match self.repository.loans_checkin(member_id, item_id) {
            Ok(()) => {
                tracing::info!("Member {} returned item {}", member_id, item_id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Checkin of {} by member {} failed: {}", item_id, member_id, e);
                Err(e)
            }
        }
    }

    /// Items currently held by a member
    pub fn member_items(&self, member_id: i32) -> AppResult<Vec<&Book>> {
        self.repository.loans_for_member(member_id)
    }
}
