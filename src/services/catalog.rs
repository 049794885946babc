//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List visible books
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list_visible().await
    }

    /// Add a new book
    pub async fn create_book(&self, book: &CreateBook) -> AppResult<i64> {
        self.repository.books.create(book).await
    }

    /// Search visible books by name; an empty result is a not-found error
    /// at this surface, unlike the late-loans listing.
    pub async fn search_books(&self, name: &str) -> AppResult<Vec<Book>> {
        let books = self.repository.books.search_visible(name).await?;

        if books.is_empty() {
            return Err(AppError::NotFound(
                "No books found matching the name".to_string(),
            ));
        }

        Ok(books)
    }

    /// Soft-delete a book
    pub async fn soft_delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.soft_delete(id).await
    }
}
