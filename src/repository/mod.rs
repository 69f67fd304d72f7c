//! Repository layer for in-memory storage

pub mod items;
pub mod loans;
pub mod members;

/// Main repository struct owning every catalog record
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub items: items::ItemsRepository,
    pub members: members::MembersRepository,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }
}
