//! Loan management service

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::loan::{CreateLoan, LateLoan, Loan},
    policy,
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all loans
    pub async fn list_loans(&self) -> AppResult<Vec<Loan>> {
        self.repository.loans.list().await
    }

    /// Get a loan by ID
    pub async fn get_loan(&self, id: i64) -> AppResult<Loan> {
        self.repository.loans.get_by_id(id).await
    }

    /// Create a new loan.
    ///
    /// The book must resolve (soft-deleted books included); the customer
    /// is not checked, so dangling references stay representable.
    pub async fn create_loan(&self, loan: &CreateLoan) -> AppResult<(i64, NaiveDate)> {
        let (cust_id, book_id, loan_date) = match (loan.cust_id, loan.book_id, loan.loan_date) {
            (Some(cust_id), Some(book_id), Some(loan_date)) => (cust_id, book_id, loan_date),
            _ => {
                return Err(AppError::Validation(
                    "Missing required loan fields".to_string(),
                ))
            }
        };

        let book = self.repository.books.get_by_id(book_id).await?;
        let due_date = policy::compute_due_date(loan_date, book.category)?;

        let id = self
            .repository
            .loans
            .create(cust_id, book_id, loan_date, due_date)
            .await?;

        Ok((id, due_date))
    }

    /// Loans past due as of `today`, annotated with how many days late.
    /// An empty result is an ordinary empty list, never a not-found.
    pub async fn late_loans(&self, today: NaiveDate) -> AppResult<Vec<LateLoan>> {
        let loans = self.repository.loans.list().await?;

        Ok(loans
            .iter()
            .filter(|loan| loan.is_late(today))
            .map(|loan| LateLoan::from_loan(loan, today))
            .collect())
    }
}
