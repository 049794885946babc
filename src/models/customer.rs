//! Customer model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Customer record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub age: i64,
}

/// Create customer request.
///
/// This legacy path performs no validation: absent fields fall back to
/// empty strings and age zero. Only the update path validates.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomer {
    pub name: Option<String>,
    pub city: Option<String>,
    pub age: Option<i64>,
}

/// Update customer request; all fields required, age must be non-negative
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub city: Option<String>,
    pub age: Option<i64>,
}
