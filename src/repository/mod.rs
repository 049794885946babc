//! Repository layer for database operations

pub mod books;
pub mod customers;
pub mod loans;

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::{book::CreateBook, customer::CreateCustomer},
    policy,
};

/// Embedded schema migrations, shared by the server binary and tests
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub books: books::BooksRepository,
    pub customers: customers::CustomersRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            customers: customers::CustomersRepository::new(pool.clone()),
            loans: loans::LoansRepository::new(pool.clone()),
            pool,
        }
    }

    /// Insert starter data when the store is brand new.
    ///
    /// Guarded by all three tables being empty, so repeated startups are
    /// no-ops. Returns whether anything was inserted.
    pub async fn seed_if_empty(&self) -> AppResult<bool> {
        let empty = self.books.count().await? == 0
            && self.customers.count().await? == 0
            && self.loans.count().await? == 0;

        if !empty {
            return Ok(false);
        }

        let books = [
            ("Book A", "Author A", 2001_i64, 1_i64),
            ("Book B", "Author B", 2005, 2),
            ("Book C", "Author C", 2010, 3),
        ];
        for (name, author, year_published, category) in books {
            self.books
                .create(&CreateBook {
                    name: Some(name.to_string()),
                    author: Some(author.to_string()),
                    year_published: Some(year_published),
                    category: Some(category),
                })
                .await?;
        }

        let customers = [("Customer One", "City A", 30_i64), ("Customer Two", "City B", 25)];
        for (name, city, age) in customers {
            self.customers
                .create(&CreateCustomer {
                    name: Some(name.to_string()),
                    city: Some(city.to_string()),
                    age: Some(age),
                })
                .await?;
        }

        let today = Utc::now().date_naive();
        for (cust_id, book_id) in [(1_i64, 1_i64), (2, 2)] {
            let book = self.books.get_by_id(book_id).await?;
            let due_date = policy::compute_due_date(today, book.category)?;
            self.loans.create(cust_id, book_id, today, due_date).await?;
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::customer::UpdateCustomer;
    use sqlx::sqlite::SqlitePoolOptions;

    // A pooled in-memory database is per-connection, so the pool is pinned
    // to a single connection.
    async fn repository() -> Repository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        MIGRATOR.run(&pool).await.unwrap();
        Repository::new(pool)
    }

    fn book(name: &str, category: i64) -> CreateBook {
        CreateBook {
            name: Some(name.to_string()),
            author: Some("Author".to_string()),
            year_published: Some(2020),
            category: Some(category),
        }
    }

    #[tokio::test]
    async fn seed_runs_once() {
        let repo = repository().await;

        assert!(repo.seed_if_empty().await.unwrap());
        assert_eq!(repo.books.count().await.unwrap(), 3);
        assert_eq!(repo.customers.count().await.unwrap(), 2);
        assert_eq!(repo.loans.count().await.unwrap(), 2);

        assert!(!repo.seed_if_empty().await.unwrap());
        assert_eq!(repo.books.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn seeded_due_dates_follow_policy() {
        let repo = repository().await;
        repo.seed_if_empty().await.unwrap();

        let loans = repo.loans.list().await.unwrap();
        let today = Utc::now().date_naive();
        assert_eq!(loans[0].due_date, today + chrono::Duration::days(10));
        assert_eq!(loans[1].due_date, today + chrono::Duration::days(5));
    }

    #[tokio::test]
    async fn soft_delete_hides_book_but_keeps_row() {
        let repo = repository().await;
        let id = repo.books.create(&book("Gone", 1)).await.unwrap();

        repo.books.soft_delete(id).await.unwrap();

        assert!(repo.books.list_visible().await.unwrap().is_empty());
        assert!(repo.books.search_visible("gone").await.unwrap().is_empty());
        assert_eq!(repo.books.get_by_id(id).await.unwrap().name, "Gone");

        // Repeating the delete is not an error
        repo.books.soft_delete(id).await.unwrap();

        let err = repo.books.soft_delete(999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn book_search_is_case_insensitive_substring() {
        let repo = repository().await;
        repo.books.create(&book("The Rust Book", 1)).await.unwrap();
        repo.books.create(&book("Cooking 101", 2)).await.unwrap();

        let hits = repo.books.search_visible("RUST").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "The Rust Book");
    }

    #[tokio::test]
    async fn customer_update_rejects_negative_age() {
        let repo = repository().await;
        let id = repo
            .customers
            .create(&CreateCustomer {
                name: Some("Ada".to_string()),
                city: Some("London".to_string()),
                age: Some(36),
            })
            .await
            .unwrap();

        let err = repo
            .customers
            .update(
                id,
                &UpdateCustomer {
                    name: Some("Ada".to_string()),
                    city: Some("London".to_string()),
                    age: Some(-5),
                },
            )
            .await
            .unwrap_err();

        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Invalid age value"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
