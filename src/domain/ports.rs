use uuid::Uuid;

use super::errors::DomainError;
use super::order::{NewOrderInput, OrderView};

/// Persistence port for the orders collection.
///
/// Every HTTP operation maps to exactly one call on this trait. Implementors
/// resolve user/product references into the returned views themselves.
pub trait OrderRepository: Send + Sync + 'static {
    /// All orders, newest first (`date_ordered` descending).
    fn list(&self) -> Result<Vec<OrderView>, DomainError>;

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError>;

    /// Inserts the order and its product reference list atomically and
    /// returns the created order. Unknown user/product references are
    /// rejected as `InvalidInput`.
    fn create(&self, input: NewOrderInput) -> Result<OrderView, DomainError>;

    /// Overwrites only the `status` field; every other field is immutable
    /// after creation. `NotFound` when no order matches `id`.
    fn update_status(&self, id: Uuid, status: String) -> Result<OrderView, DomainError>;

    /// `NotFound` when no order matches `id`.
    fn delete(&self, id: Uuid) -> Result<(), DomainError>;

    /// All orders placed by `user_id`, newest first.
    fn list_by_user(&self, user_id: Uuid) -> Result<Vec<OrderView>, DomainError>;

    /// Sum of `total_price` over every order; 0 when there are none.
    fn total_sales(&self) -> Result<f64, DomainError>;

    fn count(&self) -> Result<i64, DomainError>;
}
