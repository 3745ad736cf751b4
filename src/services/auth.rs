//! Token issuance and validation

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::{
    error::{AppError, AppResult},
    models::token::Token,
    repository::Repository,
};

/// Lifetime applied to every issued token. `AuthConfig::token_expiration_seconds`
/// is not consulted.
pub const TOKEN_LIFETIME_SECS: i64 = 3600;

const SEED_LEN: usize = 60;

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Issue a token for a member that exists in the store
    pub async fn issue_token(&self, member_id: Option<i64>) -> AppResult<String> {
        let member_id = member_id.ok_or(AppError::UnknownMember)?;
        if !self.repository.members.exists(member_id).await {
            tracing::debug!(member_id, "Token requested for unknown member");
            return Err(AppError::UnknownMember);
        }
        Ok(self.generate_token(member_id).await)
    }

    /// Store and return a fresh one-hour token. The member id is not checked.
    pub async fn generate_token(&self, member_id: i64) -> String {
        self.generate_token_at(member_id, Utc::now()).await
    }

    pub async fn generate_token_at(&self, member_id: i64, now: DateTime<Utc>) -> String {
        let value = random_token();
        let expires_at = now + Duration::seconds(TOKEN_LIFETIME_SECS);

        self.repository
            .tokens
            .insert(Token {
                member_id,
                value: value.clone(),
                expires_at,
            })
            .await;

        tracing::info!(member_id, %expires_at, "Token issued");
        value
    }

    /// Resolve a token to its member id, rejecting unknown or expired tokens
    pub async fn validate_token(&self, value: &str) -> AppResult<i64> {
        self.validate_token_at(value, Utc::now()).await
    }

    pub async fn validate_token_at(&self, value: &str, now: DateTime<Utc>) -> AppResult<i64> {
        self.repository
            .tokens
            .find_owner(value, now)
            .await
            .ok_or_else(|| AppError::Authentication("Invalid or expired token".to_string()))
    }
}

/// 64 lowercase hex chars: SHA-256 of 60 bytes from the OS RNG
fn random_token() -> String {
    let mut seed = [0u8; SEED_LEN];
    OsRng.fill_bytes(&mut seed);
    hex::encode(Sha256::digest(seed))
}
