//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, MessageResponse},
    models::book::{Book, CreateBook},
};

use super::ApiJson;

/// List all books that have not been deleted
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of visible books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = MessageResponse),
        (status = 400, description = "Missing field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ApiJson(book): ApiJson<CreateBook>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.catalog.create_book(&book).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Book added successfully!".to_string(),
        }),
    ))
}

/// Search visible books by name substring
#[utoipa::path(
    get,
    path = "/books/search/{name}",
    tag = "books",
    params(
        ("name" = String, Path, description = "Name fragment, case-insensitive")
    ),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 404, description = "No match", body = MessageResponse)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.search_books(&name).await?;
    Ok(Json(books))
}

/// Soft-delete a book, hiding it from list and search reads
#[utoipa::path(
    put,
    path = "/books/delete/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book hidden", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn soft_delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.soft_delete_book(id).await?;

    Ok(Json(MessageResponse {
        message: "Book deleted successfully!".to_string(),
    }))
}
