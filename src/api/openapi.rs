//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, customers, health, loans};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "0.1.0",
        description = "Library records REST API"
    ),
    paths(
        // Health
        health::index,
        health::health_check,
        // Books
        books::list_books,
        books::create_book,
        books::search_books,
        books::soft_delete_book,
        // Customers
        customers::list_customers,
        customers::get_customer,
        customers::search_customers,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        // Loans
        loans::list_loans,
        loans::get_loan,
        loans::create_loan,
        loans::late_loans,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            // Customers
            crate::models::customer::Customer,
            crate::models::customer::CreateCustomer,
            crate::models::customer::UpdateCustomer,
            // Loans
            crate::models::loan::Loan,
            crate::models::loan::CreateLoan,
            crate::models::loan::LateLoan,
            loans::LoanCreatedResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::MessageResponse,
        )
    ),
    tags(
        (name = "health", description = "Service status endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "customers", description = "Customer management"),
        (name = "loans", description = "Loan management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
