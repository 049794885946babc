//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get book by ID.
    ///
    /// Resolves soft-deleted books too: loans keep access to their book's
    /// historical data, and the delete flag only governs list/search reads.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// List all books that are not soft-deleted
    pub async fn list_visible(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE deleted = 0 ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Case-insensitive substring search over visible books' names
    pub async fn search_visible(&self, name: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE deleted = 0 AND LOWER(name) LIKE $1 ORDER BY id",
        )
        .bind(format!("%{}%", name.to_lowercase()))
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<i64> {
        let (name, author, year_published, category) =
            match (&book.name, &book.author, book.year_published, book.category) {
                (Some(name), Some(author), Some(year), Some(category)) => {
                    (name, author, year, category)
                }
                _ => {
                    return Err(AppError::Validation(
                        "Missing required book fields".to_string(),
                    ))
                }
            };

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO books (name, author, year_published, category, deleted)
            VALUES ($1, $2, $3, $4, 0)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(author)
        .bind(year_published)
        .bind(category)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Mark a book as deleted, hiding it from list and search reads.
    ///
    /// Idempotent: re-deleting an already-hidden book succeeds.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("UPDATE books SET deleted = 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        Ok(())
    }

    /// Count all books, deleted included
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
