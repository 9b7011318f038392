use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrderInput, OrderView};
use crate::domain::ports::OrderRepository;

/// Application facade over the injected persistence port.
///
/// Owns the repository for the lifetime of the process; handlers never touch
/// the store directly.
pub struct OrderService {
    repo: Box<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: impl OrderRepository) -> Self {
        Self {
            repo: Box::new(repo),
        }
    }

    pub fn list_orders(&self) -> Result<Vec<OrderView>, DomainError> {
        self.repo.list()
    }

    pub fn get_order(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        self.repo.find_by_id(id)
    }

    pub fn create_order(&self, input: NewOrderInput) -> Result<OrderView, DomainError> {
        self.repo.create(input)
    }

    pub fn update_status(&self, id: Uuid, status: String) -> Result<OrderView, DomainError> {
        self.repo.update_status(id, status)
    }

    pub fn delete_order(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.delete(id)
    }

    pub fn list_user_orders(&self, user_id: Uuid) -> Result<Vec<OrderView>, DomainError> {
        self.repo.list_by_user(user_id)
    }

    pub fn total_sales(&self) -> Result<f64, DomainError> {
        self.repo.total_sales()
    }

    pub fn count_orders(&self) -> Result<i64, DomainError> {
        self.repo.count()
    }
}
