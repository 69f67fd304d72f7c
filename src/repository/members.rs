//! Members repository

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::member::Member,
};

#[derive(Debug, Clone, Default)]
pub struct MembersRepository {
    members: IndexMap<i32, Member>,
}

impl MembersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new member. The identifier must not be in use.
    pub fn create(&mut self, member: Member) -> AppResult<()> {
        if self.members.contains_key(&member.id) {
            return Err(AppError::Duplicate(format!("member {}", member.id)));
        }
        self.members.insert(member.id, member);
        Ok(())
    }

    pub fn get_by_id(&self, id: i32) -> AppResult<&Member> {
        self.members.get(&id).ok_or(AppError::MemberNotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: i32) -> AppResult<&mut Member> {
        self.members.get_mut(&id).ok_or(AppError::MemberNotFound(id))
    }

    pub fn list(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }
}
