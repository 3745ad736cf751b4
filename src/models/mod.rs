//! Data models for Libris

pub mod book;
pub mod member;
pub mod token;

// Re-export commonly used types
pub use book::{Book, BookInput};
pub use member::{Member, MemberInput};
pub use token::Token;
