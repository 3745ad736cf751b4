//! In-memory record store
//!
//! Each table sits behind its own mutex. Id assignment and append happen
//! under the same lock, so concurrent creates never share or skip an id.

pub mod books;
pub mod members;
pub mod tokens;

/// Main repository struct holding every table
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub tokens: tokens::TokensRepository,
}

impl Repository {
    /// Create an empty store; both id counters start at 1
    pub fn new() -> Self {
        Self::default()
    }
}
