//! Bearer token record

use chrono::{DateTime, Utc};

/// Issued access token. Never removed once stored.
#[derive(Debug, Clone)]
pub struct Token {
    pub member_id: i64,
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Exact value match with an expiry strictly after `now`
    pub fn is_valid_at(&self, value: &str, now: DateTime<Utc>) -> bool {
        self.value == value && self.expires_at > now
    }
}
