//! Loans repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::loan::Loan,
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Sqlite>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Loan not found".to_string()))
    }

    /// List all loans
    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>("SELECT * FROM loans ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(loans)
    }

    /// Insert a new loan. The due date is computed upstream by the loan
    /// policy and stored as-is; loans are immutable after this point.
    pub async fn create(
        &self,
        cust_id: i64,
        book_id: i64,
        loan_date: NaiveDate,
        due_date: NaiveDate,
    ) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO loans (cust_id, book_id, loan_date, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(cust_id)
        .bind(book_id)
        .bind(loan_date)
        .bind(due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Count all loans
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
