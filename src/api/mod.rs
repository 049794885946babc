//! API handlers for Libris REST endpoints

pub mod books;
pub mod customers;
pub mod health;
pub mod loans;
pub mod openapi;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor that surfaces malformed or absent bodies as 400
/// validation errors instead of axum's default rejection statuses.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        Ok(ApiJson(value))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS open to any origin, like the original service
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books))
        .route("/books", post(books::create_book))
        .route("/books/search/:name", get(books::search_books))
        .route("/books/delete/:id", put(books::soft_delete_book))
        // Customers
        .route("/customers", get(customers::list_customers))
        .route("/customers/:id", get(customers::get_customer))
        .route("/customers/:id", put(customers::update_customer))
        .route("/customers/:id", delete(customers::delete_customer))
        .route("/customers/search/:name", get(customers::search_customers))
        .route("/add_customer", post(customers::create_customer))
        // Loans
        .route("/loans", get(loans::list_loans))
        .route("/loans", post(loans::create_loan))
        .route("/loans/late", get(loans::late_loans))
        .route("/loans/:id", get(loans::get_loan))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    routes
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
