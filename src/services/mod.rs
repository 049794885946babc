//! Business logic services

pub mod catalog;
pub mod customers;
pub mod loans;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub customers: customers::CustomersService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            customers: customers::CustomersService::new(repository.clone()),
            loans: loans::LoansService::new(repository),
        }
    }
}
