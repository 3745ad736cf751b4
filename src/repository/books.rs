//! Books table

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
};

#[derive(Debug)]
struct BooksTable {
    rows: Vec<Book>,
    next_id: i64,
}

impl Default for BooksTable {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

#[derive(Clone, Default)]
pub struct BooksRepository {
    table: Arc<Mutex<BooksTable>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a book under the next id
    pub async fn create(&self, input: BookInput) -> Book {
        let mut table = self.table.lock().await;
        let id = table.next_id;
        table.next_id += 1;

        let book = Book::from_input(id, input);
        table.rows.push(book.clone());
        book
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.table
            .lock()
            .await
            .rows
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Replace a book in place, keeping its id and position
    pub async fn update(&self, id: i64, input: BookInput) -> AppResult<Book> {
        let mut table = self.table.lock().await;
        let slot = table
            .rows
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        *slot = Book::from_input(id, input);
        Ok(slot.clone())
    }

    /// Remove every book with this id. Returns how many rows went away.
    pub async fn delete(&self, id: i64) -> usize {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|book| book.id != id);
        before - table.rows.len()
    }

    /// Books whose title or author contains `query`, ignoring case
    pub async fn search(&self, query: &str) -> Vec<Book> {
        let needle = query.to_lowercase();
        self.table
            .lock()
            .await
            .rows
            .iter()
            .filter(|book| book.matches(&needle))
            .cloned()
            .collect()
    }

    /// One page of books in insertion order. Pages start at 1.
    pub async fn list(&self, page: i64, page_size: usize) -> Vec<Book> {
        if page < 1 {
            return Vec::new();
        }
        let start = usize::try_from(page - 1)
            .ok()
            .and_then(|p| p.checked_mul(page_size));
        let Some(start) = start else {
            return Vec::new();
        };

        self.table
            .lock()
            .await
            .rows
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect()
    }
}
