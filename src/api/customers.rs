//! Customer management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, MessageResponse},
    models::customer::{CreateCustomer, Customer, UpdateCustomer},
};

use super::ApiJson;

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses(
        (status = 200, description = "List of customers", body = Vec<Customer>)
    )
)]
pub async fn list_customers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.customers.list_customers().await?;
    Ok(Json(customers))
}

/// Get customer details by ID
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer details", body = Customer),
        (status = 404, description = "Customer not found", body = MessageResponse)
    )
)]
pub async fn get_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.get_customer(id).await?;
    Ok(Json(customer))
}

/// Search customers by name substring
#[utoipa::path(
    get,
    path = "/customers/search/{name}",
    tag = "customers",
    params(
        ("name" = String, Path, description = "Name fragment, case-insensitive")
    ),
    responses(
        (status = 200, description = "Matching customers", body = Vec<Customer>),
        (status = 404, description = "No match", body = MessageResponse)
    )
)]
pub async fn search_customers(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.customers.search_customers(&name).await?;
    Ok(Json(customers))
}

/// Register a new customer.
///
/// This legacy endpoint accepts whatever it is given; missing fields
/// default instead of failing. Only the update endpoint validates.
#[utoipa::path(
    post,
    path = "/add_customer",
    tag = "customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created", body = MessageResponse)
    )
)]
pub async fn create_customer(
    State(state): State<crate::AppState>,
    ApiJson(customer): ApiJson<CreateCustomer>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.customers.create_customer(&customer).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Customer added successfully!".to_string(),
        }),
    ))
}

/// Update an existing customer
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = MessageResponse),
        (status = 400, description = "Missing field or invalid age", body = crate::error::ErrorResponse),
        (status = 404, description = "Customer not found", body = MessageResponse)
    )
)]
pub async fn update_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    ApiJson(customer): ApiJson<UpdateCustomer>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .customers
        .update_customer(id, &customer)
        .await?;

    Ok(Json(MessageResponse {
        message: "Customer updated successfully!".to_string(),
    }))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 404, description = "Customer not found", body = MessageResponse)
    )
)]
pub async fn delete_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.customers.delete_customer(id).await?;

    Ok(Json(MessageResponse {
        message: "Customer deleted successfully!".to_string(),
    }))
}
