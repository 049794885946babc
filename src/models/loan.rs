//! Loan model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan record from database.
///
/// The computed due date is exposed as `return_date` in JSON. A loan is
/// immutable once created; there is no returned state, so lateness is
/// purely a comparison of the due date against the query date.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i64,
    pub cust_id: i64,
    pub book_id: i64,
    pub loan_date: NaiveDate,
    #[serde(rename = "return_date")]
    pub due_date: NaiveDate,
}

impl Loan {
    /// Whether this loan is past due as of `today`
    pub fn is_late(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }

    /// Whole days past due; only meaningful when [`Loan::is_late`] holds
    pub fn days_late(&self, today: NaiveDate) -> i64 {
        (today - self.due_date).num_days()
    }
}

/// Create loan request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLoan {
    pub cust_id: Option<i64>,
    pub book_id: Option<i64>,
    /// Loan start date as `YYYY-MM-DD`
    pub loan_date: Option<NaiveDate>,
}

/// Late loan with days-overdue annotation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LateLoan {
    pub id: i64,
    pub cust_id: i64,
    pub book_id: i64,
    pub loan_date: NaiveDate,
    #[serde(rename = "return_date")]
    pub due_date: NaiveDate,
    pub days_late: i64,
}

impl LateLoan {
    /// Annotate a late loan with its overdue day count as of `today`
    pub fn from_loan(loan: &Loan, today: NaiveDate) -> Self {
        Self {
            id: loan.id,
            cust_id: loan.cust_id,
            book_id: loan.book_id,
            loan_date: loan.loan_date,
            due_date: loan.due_date,
            days_late: loan.days_late(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loan(due: NaiveDate) -> Loan {
        Loan {
            id: 1,
            cust_id: 1,
            book_id: 1,
            loan_date: due - chrono::Duration::days(5),
            due_date: due,
        }
    }

    #[test]
    fn due_today_is_not_late() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        assert!(!loan(today).is_late(today));
    }

    #[test]
    fn one_day_past_due() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let l = loan(today - chrono::Duration::days(1));
        assert!(l.is_late(today));
        assert_eq!(l.days_late(today), 1);
    }

    #[test]
    fn late_loan_annotation() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let l = loan(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
        let late = LateLoan::from_loan(&l, today);
        assert_eq!(late.days_late, 7);
        assert_eq!(late.due_date, l.due_date);
    }
}
