use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user reference resolved to the fields exposed on order reads.
#[derive(Debug, Clone)]
pub struct UserRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CategoryRef {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub category: CategoryRef,
}

/// An order with its user and product references fully resolved.
///
/// The repository always resolves references completely; each HTTP route then
/// projects the subset of fields it exposes (names only on the list, full
/// products on fetch-by-id, nested category on the per-user listing).
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub status: String,
    pub total_price: f64,
    pub quantity: i32,
    pub user: UserRef,
    pub products: Vec<ProductView>,
    pub date_ordered: DateTime<Utc>,
}

/// Fields accepted at order creation. `product_ids` keeps the client's ordering.
#[derive(Debug, Clone)]
pub struct NewOrderInput {
    pub address: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    /// Defaults to "Pending" when the client omits it.
    pub status: Option<String>,
    pub total_price: f64,
    pub quantity: i32,
    pub user_id: Uuid,
    pub product_ids: Vec<Uuid>,
}
