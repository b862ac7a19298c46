//! Membership operations

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{CreateMember, Member},
};

use super::Ledger;

impl Ledger {
    /// Register a new member
    pub fn add_member(&mut self, new: CreateMember) -> AppResult<&Member> {
        new.validate()?;
        if self.members.contains_key(&new.id) {
            return Err(AppError::Duplicate(format!(
                "Member with id {} already exists",
                new.id
            )));
        }

        tracing::info!("Member add: {}", new.id);

        let CreateMember { id, name } = new;
        let member = Member {
            id: id.clone(),
            name,
        };
        Ok(self.members.entry(id).or_insert(member))
    }

    /// Look up a member by id
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    /// All members in insertion order
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    /// Number of registered members
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
