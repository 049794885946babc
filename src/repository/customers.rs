//! Customers repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::customer::{CreateCustomer, Customer, UpdateCustomer},
};

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Sqlite>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get customer by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }

    /// List all customers
    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(customers)
    }

    /// Case-insensitive substring search over customer names
    pub async fn search(&self, name: &str) -> AppResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT * FROM customers WHERE LOWER(name) LIKE $1 ORDER BY id",
        )
        .bind(format!("%{}%", name.to_lowercase()))
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Create a new customer.
    ///
    /// The legacy create path validates nothing; absent fields default.
    pub async fn create(&self, customer: &CreateCustomer) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO customers (name, city, age)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(customer.name.as_deref().unwrap_or_default())
        .bind(customer.city.as_deref().unwrap_or_default())
        .bind(customer.age.unwrap_or_default())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Update an existing customer; all fields required, age non-negative
    pub async fn update(&self, id: i64, customer: &UpdateCustomer) -> AppResult<Customer> {
        // 404 before validation, matching the legacy handler order
        self.get_by_id(id).await?;

        let (name, city, age) = match (&customer.name, &customer.city, customer.age) {
            (Some(name), Some(city), Some(age)) => (name, city, age),
            _ => {
                return Err(AppError::Validation(
                    "Missing required customer fields".to_string(),
                ))
            }
        };

        if age < 0 {
            return Err(AppError::Validation("Invalid age value".to_string()));
        }

        sqlx::query("UPDATE customers SET name = $1, city = $2, age = $3 WHERE id = $4")
            .bind(name)
            .bind(city)
            .bind(age)
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.get_by_id(id).await
    }

    /// Delete a customer. Hard delete; existing loans keep their cust_id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        Ok(())
    }

    /// Count all customers
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
