//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i64,
    pub available: bool,
}

/// Create/replace book request.
///
/// Omitted fields take their defaults, so an update resets anything the
/// payload leaves out. A supplied `id` is accepted and ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct BookInput {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i64,
    pub available: bool,
}

impl Default for BookInput {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            author: String::new(),
            isbn: String::new(),
            published_year: 0,
            available: true,
        }
    }
}

impl Book {
    /// Build the stored record for `input` under the given id
    pub fn from_input(id: i64, input: BookInput) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            isbn: input.isbn,
            published_year: input.published_year,
            available: input.available,
        }
    }

    /// Case-insensitive substring match on title or author
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.author.to_lowercase().contains(needle_lower)
    }
}
