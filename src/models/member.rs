//! Member (borrower) model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Library member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i32,
    pub name: String,
    /// Identifiers of the items currently held, in borrow order
    pub borrowed_items: Vec<String>,
}

impl Member {
    pub fn display_info(&self) -> String {
        format!("Member #{} - {}", self.id, self.name)
    }

    pub fn holds(&self, item_id: &str) -> bool {
        self.borrowed_items.iter().any(|id| id == item_id)
    }
}

/// Create member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMember {
    pub id: i32,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

impl CreateMember {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl From<CreateMember> for Member {
    fn from(req: CreateMember) -> Self {
        Self {
            id: req.id,
            name: req.name,
            borrowed_items: Vec::new(),
        }
    }
}
