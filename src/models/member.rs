//! Member model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Library member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Borrowed book ids. Not checked against the catalog; duplicates allowed.
    pub borrowed_books: Vec<i64>,
}

/// Create/replace member request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct MemberInput {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub borrowed_books: Vec<i64>,
}

impl Member {
    pub fn from_input(id: i64, input: MemberInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            borrowed_books: input.borrowed_books,
        }
    }
}
