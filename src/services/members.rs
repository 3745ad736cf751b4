//! Member management service

use crate::{
    error::AppResult,
    models::member::{Member, MemberInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new member
    pub async fn add_member(&self, input: MemberInput) -> Member {
        let member = self.repository.members.create(input).await;
        tracing::info!(member_id = member.id, "Member created");
        member
    }

    /// Get member by ID
    pub async fn get_member(&self, id: i64) -> AppResult<Member> {
        tracing::debug!(member_id = id, "Fetching member");
        self.repository.members.get_by_id(id).await
    }

    /// Replace an existing member
    pub async fn update_member(&self, id: i64, input: MemberInput) -> AppResult<Member> {
        let member = self.repository.members.update(id, input).await?;
        tracing::info!(member_id = id, "Member updated");
        Ok(member)
    }

    /// Delete a member. Succeeds whether or not the id existed; tokens survive.
    pub async fn delete_member(&self, id: i64) {
        let removed = self.repository.members.delete(id).await;
        tracing::info!(member_id = id, removed, "Member deleted");
    }
}
