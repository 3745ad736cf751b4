//! Catalog (books) service

use crate::{
    config::CatalogConfig,
    error::AppResult,
    models::book::{Book, BookInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(repository: Repository, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    /// Add a book to the catalog
    pub async fn add_book(&self, input: BookInput) -> Book {
        let book = self.repository.books.create(input).await;
        tracing::info!(book_id = book.id, title = %book.title, "Book created");
        book
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        tracing::debug!(book_id = id, "Fetching book");
        self.repository.books.get_by_id(id).await
    }

    /// Replace an existing book
    pub async fn update_book(&self, id: i64, input: BookInput) -> AppResult<Book> {
        let book = self.repository.books.update(id, input).await?;
        tracing::info!(book_id = id, "Book updated");
        Ok(book)
    }

    /// Delete a book. Succeeds whether or not the id existed.
    pub async fn delete_book(&self, id: i64) {
        let removed = self.repository.books.delete(id).await;
        tracing::info!(book_id = id, removed, "Book deleted");
    }

    /// Search titles and authors
    pub async fn search_books(&self, query: &str) -> Vec<Book> {
        let books = self.repository.books.search(query).await;
        tracing::debug!(query, hits = books.len(), "Book search");
        books
    }

    /// List one page of the catalog using the configured page size
    pub async fn list_books(&self, page: i64) -> Vec<Book> {
        self.repository.books.list(page, self.config.page_size).await
    }
}
