//! In-memory book store

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields, BookId},
};

/// Book store keyed by id.
///
/// The map lives behind a single lock: reads share it, every mutation takes
/// it exclusively, and each operation locks exactly once.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<BTreeMap<BookId, Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List all books, ascending by id
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.values().cloned().collect()
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: &BookId) -> AppResult<Book> {
        self.books
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Insert a new book; its id must be free
    pub async fn create(&self, book: Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if books.contains_key(&book.id) {
            return Err(AppError::Conflict(format!("Book {} already exists", book.id)));
        }
        books.insert(book.id.clone(), book.clone());
        Ok(book)
    }

    /// Merge `partial` into an existing book
    pub async fn update(&self, id: &BookId, partial: BookFields) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        book.merge(partial);
        Ok(book.clone())
    }

    /// Delete a book
    pub async fn delete(&self, id: &BookId) -> AppResult<()> {
        self.books
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }
}
