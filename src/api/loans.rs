//! Loan management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, MessageResponse},
    models::loan::{CreateLoan, LateLoan, Loan},
};

use super::ApiJson;

/// Loan creation response with the computed due date
#[derive(Serialize, ToSchema)]
pub struct LoanCreatedResponse {
    /// Status message
    pub message: String,
    /// Due date as `YYYY-MM-DD`, derived from the book's category
    pub return_date: NaiveDate,
}

/// List all loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "List of loans", body = Vec<Loan>)
    )
)]
pub async fn list_loans(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Loan>>> {
    let loans = state.services.loans.list_loans().await?;
    Ok(Json(loans))
}

/// Get loan details by ID
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = "loans",
    params(
        ("id" = i64, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found", body = MessageResponse)
    )
)]
pub async fn get_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.get_loan(id).await?;
    Ok(Json(loan))
}

/// Create a new loan
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = LoanCreatedResponse),
        (status = 400, description = "Missing field or invalid book type", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    ApiJson(loan): ApiJson<CreateLoan>,
) -> AppResult<(StatusCode, Json<LoanCreatedResponse>)> {
    let (_id, due_date) = state.services.loans.create_loan(&loan).await?;

    Ok((
        StatusCode::CREATED,
        Json(LoanCreatedResponse {
            message: "Loan added successfully!".to_string(),
            return_date: due_date,
        }),
    ))
}

/// List loans past their due date.
///
/// Always 200; no late loans yields an empty array, unlike the name
/// searches which report empty results as 404.
#[utoipa::path(
    get,
    path = "/loans/late",
    tag = "loans",
    responses(
        (status = 200, description = "Late loans with days overdue", body = Vec<LateLoan>)
    )
)]
pub async fn late_loans(State(state): State<crate::AppState>) -> AppResult<Json<Vec<LateLoan>>> {
    let today = Utc::now().date_naive();
    let loans = state.services.loans.late_loans(today).await?;
    Ok(Json(loans))
}
