//! Books service

use crate::{
    error::AppResult,
    models::book::{Book, BookFields, BookId},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Book> {
        let id: BookId = id.parse()?;
        self.repository.books.get_by_id(&id).await
    }

    /// Create a book from a client object; the object must carry a free `id`
    pub async fn create(&self, fields: BookFields) -> AppResult<Book> {
        let book = Book::from_fields(fields)?;
        let id = book.id.clone();
        let created = self.repository.books.create(book).await?;
        tracing::info!(book_id = %id, "Book created");
        Ok(created)
    }

    pub async fn update(&self, id: &str, fields: BookFields) -> AppResult<Book> {
        let id: BookId = id.parse()?;
        let updated = self.repository.books.update(&id, fields).await?;
        tracing::info!(book_id = %id, "Book updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id: BookId = id.parse()?;
        self.repository.books.delete(&id).await?;
        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }

    /// Number of stored books (for readiness)
    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::{json, Value};

    fn fields(value: Value) -> BookFields {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    fn service() -> BooksService {
        BooksService::new(Repository::new())
    }

    #[tokio::test]
    async fn test_create_requires_id() {
        let books = service();
        let result = books.create(fields(json!({"title": "Updated Book 1"}))).await;
        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
        assert_eq!(books.count().await, 0);
    }

    #[tokio::test]
    async fn test_empty_id_is_invalid() {
        let books = service();
        assert!(matches!(books.get("").await, Err(AppError::InvalidArgument(_))));
        assert!(matches!(
            books.update("", BookFields::new()).await,
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(books.delete("").await, Err(AppError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_path_id_matches_numeric_id() {
        let books = service();
        books.create(fields(json!({"id": 1, "title": "Book 1"}))).await.unwrap();

        let book = books.get("1").await.unwrap();
        assert_eq!(book.get("title"), Some(&json!("Book 1")));

        let result = books.create(fields(json!({"id": "1", "title": "Other"}))).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_book_lifecycle() {
        let books = service();
        let book1 = json!({"id": 1, "title": "Book 1", "author": "Author 1", "published_date": "2022-01-01", "price": 9.99});
        let book2 = json!({"id": 2, "title": "Book 2", "author": "Author 2", "published_date": "2022-02-01", "price": 10.99});
        let updated = json!({"title": "Updated Book 1", "author": "Updated Author 1", "published_date": "2022-01-02", "price": 19.99});

        books.create(fields(book1.clone())).await.unwrap();
        books.create(fields(book2.clone())).await.unwrap();
        assert_eq!(serde_json::to_value(books.list().await).unwrap(), json!([book1, book2.clone()]));

        let merged = books.update("1", fields(updated)).await.unwrap();
        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({"id": 1, "title": "Updated Book 1", "author": "Updated Author 1", "published_date": "2022-01-02", "price": 19.99})
        );

        books.delete("1").await.unwrap();
        assert!(matches!(books.get("1").await, Err(AppError::NotFound(_))));
        assert_eq!(serde_json::to_value(books.list().await).unwrap(), json!([book2]));
    }
}
