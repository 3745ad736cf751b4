//! Tokens table. Append-only: expired tokens are filtered on read, never evicted.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::token::Token;

#[derive(Clone, Default)]
pub struct TokensRepository {
    rows: Arc<Mutex<Vec<Token>>>,
}

impl TokensRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token alongside any the member already holds
    pub async fn insert(&self, token: Token) {
        self.rows.lock().await.push(token);
    }

    /// Owner of the first stored token matching `value` that is still live at `now`
    pub async fn find_owner(&self, value: &str, now: DateTime<Utc>) -> Option<i64> {
        self.rows
            .lock()
            .await
            .iter()
            .find(|token| token.is_valid_at(value, now))
            .map(|token| token.member_id)
    }

    /// Number of stored tokens, expired ones included
    pub async fn count(&self) -> usize {
        self.rows.lock().await.len()
    }
}
