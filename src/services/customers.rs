//! Customer management service

use crate::{
    error::{AppError, AppResult},
    models::customer::{CreateCustomer, Customer, UpdateCustomer},
    repository::Repository,
};

#[derive(Clone)]
pub struct CustomersService {
    repository: Repository,
}

impl CustomersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all customers
    pub async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.repository.customers.list().await
    }

    /// Get a customer by ID
    pub async fn get_customer(&self, id: i64) -> AppResult<Customer> {
        self.repository.customers.get_by_id(id).await
    }

    /// Search customers by name; empty results are not found
    pub async fn search_customers(&self, name: &str) -> AppResult<Vec<Customer>> {
        let customers = self.repository.customers.search(name).await?;

        if customers.is_empty() {
            return Err(AppError::NotFound(
                "No customers found matching the name".to_string(),
            ));
        }

        Ok(customers)
    }

    /// Register a customer (legacy unvalidated path)
    pub async fn create_customer(&self, customer: &CreateCustomer) -> AppResult<i64> {
        self.repository.customers.create(customer).await
    }

    /// Update a customer
    pub async fn update_customer(&self, id: i64, customer: &UpdateCustomer) -> AppResult<Customer> {
        self.repository.customers.update(id, customer).await
    }

    /// Delete a customer
    pub async fn delete_customer(&self, id: i64) -> AppResult<()> {
        self.repository.customers.delete(id).await
    }
}
