//! Members table

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::member::{Member, MemberInput},
};

#[derive(Debug)]
struct MembersTable {
    rows: Vec<Member>,
    next_id: i64,
}

impl Default for MembersTable {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

#[derive(Clone, Default)]
pub struct MembersRepository {
    table: Arc<Mutex<MembersTable>>,
}

impl MembersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member under the next id
    pub async fn create(&self, input: MemberInput) -> Member {
        let mut table = self.table.lock().await;
        let id = table.next_id;
        table.next_id += 1;

        let member = Member::from_input(id, input);
        table.rows.push(member.clone());
        member
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Member> {
        self.table
            .lock()
            .await
            .rows
            .iter()
            .find(|member| member.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))
    }

    /// Check whether a member with this id is stored
    pub async fn exists(&self, id: i64) -> bool {
        self.table.lock().await.rows.iter().any(|member| member.id == id)
    }

    /// Replace a member wholesale, keeping its id and position
    pub async fn update(&self, id: i64, input: MemberInput) -> AppResult<Member> {
        let mut table = self.table.lock().await;
        let slot = table
            .rows
            .iter_mut()
            .find(|member| member.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;

        *slot = Member::from_input(id, input);
        Ok(slot.clone())
    }

    /// Remove every member with this id. Tokens and loans are left alone.
    pub async fn delete(&self, id: i64) -> usize {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|member| member.id != id);
        before - table.rows.len()
    }
}
