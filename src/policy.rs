//! Loan duration policy.
//!
//! Due dates are derived from a book's category code and nothing else;
//! every call site goes through [`compute_due_date`].

use chrono::{Duration, NaiveDate};

use crate::error::{AppError, AppResult};

/// Book loan-duration categories, stored as integer codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i64)]
pub enum BookCategory {
    /// Code 1: standard loan, 10 days
    Standard = 1,
    /// Code 2: short-term loan, 5 days
    ShortTerm = 2,
    /// Code 3: express loan, 2 days
    Express = 3,
}

impl BookCategory {
    /// Resolve a stored category code
    pub fn from_code(code: i64) -> AppResult<Self> {
        match code {
            1 => Ok(BookCategory::Standard),
            2 => Ok(BookCategory::ShortTerm),
            3 => Ok(BookCategory::Express),
            other => Err(AppError::Validation(format!("Invalid book type: {}", other))),
        }
    }

    /// Loan duration granted to this category
    pub fn loan_days(self) -> i64 {
        match self {
            BookCategory::Standard => 10,
            BookCategory::ShortTerm => 5,
            BookCategory::Express => 2,
        }
    }
}

/// Compute the due date for a loan taken on `loan_date` against a book
/// with category code `category`.
pub fn compute_due_date(loan_date: NaiveDate, category: i64) -> AppResult<NaiveDate> {
    let category = BookCategory::from_code(category)?;
    Ok(loan_date + Duration::days(category.loan_days()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn category_offsets() {
        let start = date(2024, 3, 1);
        assert_eq!(compute_due_date(start, 1).unwrap(), date(2024, 3, 11));
        assert_eq!(compute_due_date(start, 2).unwrap(), date(2024, 3, 6));
        assert_eq!(compute_due_date(start, 3).unwrap(), date(2024, 3, 3));
    }

    #[test]
    fn express_rolls_over_month_boundary() {
        assert_eq!(
            compute_due_date(date(2024, 1, 1), 3).unwrap(),
            date(2024, 1, 3)
        );
        assert_eq!(
            compute_due_date(date(2023, 12, 30), 2).unwrap(),
            date(2024, 1, 4)
        );
    }

    #[test]
    fn standard_crosses_leap_day() {
        assert_eq!(
            compute_due_date(date(2024, 2, 25), 1).unwrap(),
            date(2024, 3, 6)
        );
    }

    #[test]
    fn deterministic() {
        let start = date(2024, 6, 15);
        assert_eq!(
            compute_due_date(start, 2).unwrap(),
            compute_due_date(start, 2).unwrap()
        );
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in [0, 4, -1, 99] {
            let err = compute_due_date(date(2024, 1, 1), code).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }
}
