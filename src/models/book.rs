//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record from database.
///
/// The category code is exposed as `type` in JSON, matching the wire
/// contract. The `deleted` flag never leaves the server; hidden books are
/// simply absent from list and search responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub year_published: i64,
    #[serde(rename = "type")]
    pub category: i64,
    #[serde(skip)]
    pub deleted: bool,
}

/// Create book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub name: Option<String>,
    pub author: Option<String>,
    pub year_published: Option<i64>,
    #[serde(rename = "type")]
    pub category: Option<i64>,
}
